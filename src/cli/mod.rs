//! Front-end subcommands and their handler implementations
//!
//! Everything here is a consumer of the decoder: traversal, rendering, and
//! comparison sit outside the core and talk to it through `Id3Handler`.

pub mod compare;
pub mod dump;
pub mod hexdump;
pub mod paths;
pub mod printer;
pub mod walk;
