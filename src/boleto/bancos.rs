//! COMPE bank code lookup.
//!
//! Covers the institutions that show up in practice on cobrança slips;
//! not an exhaustive registry.

/// Look up the common name of a 3-digit COMPE bank code.
pub fn nome_banco(codigo: &str) -> Option<&'static str> {
    BANCOS
        .binary_search_by_key(&codigo, |&(c, _)| c)
        .ok()
        .map(|i| BANCOS[i].1)
}

/// Sorted by code for binary search.
static BANCOS: &[(&str, &str)] = &[
    ("001", "Banco do Brasil"),
    ("033", "Santander"),
    ("041", "Banrisul"),
    ("070", "BRB"),
    ("077", "Banco Inter"),
    ("104", "Caixa Econômica Federal"),
    ("208", "BTG Pactual"),
    ("212", "Banco Original"),
    ("237", "Bradesco"),
    ("260", "Nu Pagamentos"),
    ("290", "PagSeguro"),
    ("323", "Mercado Pago"),
    ("336", "C6 Bank"),
    ("341", "Itaú Unibanco"),
    ("389", "Banco Mercantil"),
    ("422", "Banco Safra"),
    ("623", "Banco PAN"),
    ("655", "Banco Votorantim"),
    ("748", "Sicredi"),
    ("756", "Sicoob"),
];
