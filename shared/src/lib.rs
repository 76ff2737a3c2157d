// Types and helpers shared by the engine and the GUI.
pub mod models;
pub mod utils;
