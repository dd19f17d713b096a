pub mod codon;
pub mod conversion;
pub mod nucleotide;
pub mod strand;
pub mod translation;

pub use codon::*;
pub use conversion::*;
pub use nucleotide::*;
pub use strand::*;
pub use translation::*;
