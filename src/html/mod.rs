mod void_elements;

pub use self::void_elements::{VoidElementSet, DEFAULT_VOID_ELEMENTS};
