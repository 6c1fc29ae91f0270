//! Document model: the rows of the open file and the cursor moving over them

pub mod cursor;
pub mod document;
