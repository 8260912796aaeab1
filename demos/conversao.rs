use cobranca::boleto::*;

fn main() {
    let barcode = "34194100000000500000000000000000000000000000";
    println!("código de barras: {barcode}");

    let linha = barcode_to_linha_digitavel(barcode).expect("44 digits");
    println!("linha digitável:  {linha}");
    println!(
        "para exibição:    {}",
        format_linha_digitavel(&linha).expect("47 digits")
    );

    let back = linha_digitavel_to_barcode(&linha).expect("47 digits");
    assert_eq!(back, barcode);
    println!("conversão inversa confere");

    // length mismatches are soft failures, not panics
    assert_eq!(barcode_to_linha_digitavel("1234"), None);
    assert_eq!(linha_digitavel_to_barcode("1234"), None);
}
