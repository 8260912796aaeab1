//! Mapping of chart-of-accounts categories onto DRE statement lines.
//!
//! Account categories come in two generations: legacy data stores the
//! DRE line name verbatim, newer data uses a numbered chart of accounts
//! (`"4.2 Salários"`) whose top-level group decides the line.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A line of the DRE income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoriaDre {
    ReceitaBruta,
    DeducoesEImpostos,
    CustoProdutosVendidos,
    DespesasComerciais,
    DespesasAdministrativas,
    OutrasDespesasOperacionais,
    ReceitasFinanceiras,
    DespesasFinanceiras,
    ImpostosSobreLucro,
}

impl CategoriaDre {
    /// All statement lines, in presentation order.
    pub const TODAS: [CategoriaDre; 9] = [
        Self::ReceitaBruta,
        Self::DeducoesEImpostos,
        Self::CustoProdutosVendidos,
        Self::DespesasComerciais,
        Self::DespesasAdministrativas,
        Self::OutrasDespesasOperacionais,
        Self::ReceitasFinanceiras,
        Self::DespesasFinanceiras,
        Self::ImpostosSobreLucro,
    ];

    /// Display name, matching the legacy account data verbatim.
    pub fn nome(self) -> &'static str {
        match self {
            Self::ReceitaBruta => "Receita Bruta",
            Self::DeducoesEImpostos => "Deduções e Impostos",
            Self::CustoProdutosVendidos => "Custo dos Produtos Vendidos",
            Self::DespesasComerciais => "Despesas Comerciais",
            Self::DespesasAdministrativas => "Despesas Administrativas",
            Self::OutrasDespesasOperacionais => "Outras Despesas Operacionais",
            Self::ReceitasFinanceiras => "Receitas Financeiras",
            Self::DespesasFinanceiras => "Despesas Financeiras",
            Self::ImpostosSobreLucro => "Impostos sobre Lucro",
        }
    }

    /// Revenue lines add to the result; everything else subtracts.
    pub fn is_receita(self) -> bool {
        matches!(self, Self::ReceitaBruta | Self::ReceitasFinanceiras)
    }
}

impl fmt::Display for CategoriaDre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nome())
    }
}

/// Map an account category onto its DRE statement line.
///
/// Legacy display names map to themselves; numbered categories map by
/// their leading top-level group. Group 11 (and anything unknown) has no
/// DRE line and yields `None`.
pub fn map_categoria(categoria: &str) -> Option<CategoriaDre> {
    let limpa = categoria.trim();
    if limpa.is_empty() {
        return None;
    }

    if let Some(linha) = CategoriaDre::TODAS.iter().find(|c| c.nome() == limpa) {
        return Some(*linha);
    }

    let prefixo: String = limpa.chars().take_while(|c| c.is_ascii_digit()).collect();
    let top: u32 = prefixo.parse().ok()?;
    match top {
        1 => Some(CategoriaDre::ReceitaBruta),
        2 => Some(CategoriaDre::DeducoesEImpostos),
        3 => Some(CategoriaDre::CustoProdutosVendidos),
        // groups 4 and 5 both land on administrative expenses
        4 | 5 => Some(CategoriaDre::DespesasAdministrativas),
        6 => Some(CategoriaDre::OutrasDespesasOperacionais),
        7 => Some(CategoriaDre::DespesasComerciais),
        8 => Some(CategoriaDre::ReceitasFinanceiras),
        9 => Some(CategoriaDre::DespesasFinanceiras),
        10 => Some(CategoriaDre::ImpostosSobreLucro),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_names_pass_through() {
        assert_eq!(map_categoria("Receita Bruta"), Some(CategoriaDre::ReceitaBruta));
        assert_eq!(
            map_categoria("Deduções e Impostos"),
            Some(CategoriaDre::DeducoesEImpostos)
        );
        assert_eq!(
            map_categoria("  Impostos sobre Lucro  "),
            Some(CategoriaDre::ImpostosSobreLucro)
        );
    }

    #[test]
    fn numbered_categories() {
        assert_eq!(map_categoria("1.1 Vendas"), Some(CategoriaDre::ReceitaBruta));
        assert_eq!(
            map_categoria("3. Custo de Mercadorias"),
            Some(CategoriaDre::CustoProdutosVendidos)
        );
        assert_eq!(
            map_categoria("4.2 Salários"),
            Some(CategoriaDre::DespesasAdministrativas)
        );
        assert_eq!(
            map_categoria("5 Pró-labore"),
            Some(CategoriaDre::DespesasAdministrativas)
        );
        assert_eq!(
            map_categoria("7.3 Comissões"),
            Some(CategoriaDre::DespesasComerciais)
        );
        assert_eq!(
            map_categoria("10.1 IRPJ"),
            Some(CategoriaDre::ImpostosSobreLucro)
        );
    }

    #[test]
    fn group_11_and_unknown_have_no_line() {
        assert_eq!(map_categoria("11.2 Investimentos"), None);
        assert_eq!(map_categoria("12 Outros"), None);
        assert_eq!(map_categoria("Categoria Inventada"), None);
        assert_eq!(map_categoria(""), None);
        assert_eq!(map_categoria("   "), None);
    }

    #[test]
    fn receita_lines() {
        assert!(CategoriaDre::ReceitaBruta.is_receita());
        assert!(CategoriaDre::ReceitasFinanceiras.is_receita());
        assert!(!CategoriaDre::DespesasFinanceiras.is_receita());
        assert!(!CategoriaDre::CustoProdutosVendidos.is_receita());
    }

    #[test]
    fn display_matches_nome() {
        for c in CategoriaDre::TODAS {
            assert_eq!(c.to_string(), c.nome());
        }
    }
}
