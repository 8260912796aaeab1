use chrono::Local;
use cobranca::boleto::*;

fn main() {
    let inputs = [
        // valid Bradesco slip, pasted as a formatted linha digitável
        "23791.23454 67890.123457 67890.123457 1 99990000150000",
        // scanned barcode
        "10497478900000123458888888888888888888888888",
        // arrecadação (utility bill) — accepted without DV verification
        "84670000001287002402002400500922432228308086",
        // corrupted check digit
        "23790999900001500001234567890123456789012345",
    ];

    let hoje = Local::now().date_naive();

    for input in inputs {
        println!("entrada: {input}");
        let digits = normalize_digits(input);
        match digits.len() {
            47 => {
                println!("  linha digitável, válida: {}", is_valid_linha_digitavel(&digits));
                if let Some(barcode) = linha_digitavel_to_barcode(&digits) {
                    inspect(&barcode, hoje);
                }
            }
            44 => {
                println!("  código de barras, válido: {}", is_valid_barcode(&digits));
                inspect(&digits, hoje);
            }
            n => println!("  {n} dígitos — não é um boleto"),
        }
        println!();
    }
}

fn inspect(barcode: &str, hoje: chrono::NaiveDate) {
    let Some(cb) = CodigoBarras::parse(barcode) else {
        return;
    };
    let banco = nome_banco(&cb.banco).unwrap_or("desconhecido");
    println!("  banco {} ({banco})", cb.banco);
    match cb.valor() {
        Some(valor) => println!("  valor: {valor}"),
        None => println!("  valor em aberto"),
    }
    match cb.vencimento(hoje) {
        Some(data) => println!("  vencimento: {data}"),
        None => println!("  sem fator de vencimento"),
    }
}
