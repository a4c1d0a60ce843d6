pub mod bitstring;

// Convenience re-exports for library users
pub use bitstring::{bitstring_to_index, check_width, index_to_bitstring, BitString, MAX_WIDTH};
