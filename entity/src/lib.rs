pub mod prelude;

pub mod pet;
