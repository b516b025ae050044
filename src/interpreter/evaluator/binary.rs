/// Dispatch of binary operators to their handlers.
pub mod core;

/// Addition, subtraction, multiplication and true division.
pub mod scalar;

/// Exponentiation.
pub mod power;

/// Floor division and modulo, which accept only integers.
pub mod integer;
