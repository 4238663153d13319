pub mod step_extractor;
