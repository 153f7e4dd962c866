//! Model ↔ entity mappers

mod ship;
