pub mod text;

pub use text::{InputSource, TextInput};
