pub mod scrolling;
