mod debug;
mod display;
mod partial_eq;
