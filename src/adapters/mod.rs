pub mod assets;
pub mod encoders;
pub mod export;
pub mod storage;
