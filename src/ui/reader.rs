pub mod anchor;
pub mod view;
