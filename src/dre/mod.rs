//! DRE (Demonstração do Resultado do Exercício) statement-line mapping.

mod categoria;

pub use categoria::{CategoriaDre, map_categoria};
