//! Date input masks and `dd/mm/yyyy` ⇄ ISO conversions.
//!
//! Brazilian forms type dates as `dd/mm/yyyy`; storage wants ISO
//! `yyyy-mm-dd`. These helpers mask progressive input and normalize the
//! formats users actually paste.

mod convert;
mod mask;

pub use convert::{from_iso, normalize_for_database, parse_data_br, to_iso};
pub use mask::apply_date_mask;
