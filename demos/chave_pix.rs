use cobranca::documento::*;

fn main() {
    let documentos = [
        "23791.23454 67890.123457 67890.123457 1 99990000150000",
        "123.456.789-09",
        "12.345.678/0001-95",
        "(11) 98765-4321",
        "pagamentos@fornecedor.com.br",
        "123e4567-e89b-12d3-a456-426614174000",
        "recibo aluguel março",
    ];

    for doc in documentos {
        let tipo = detect_tipo_documento(doc);
        match tipo {
            TipoDocumento::Pix => {
                let chave = detect_chave_pix(doc);
                println!("{doc:55} -> PIX ({chave:?})");
            }
            _ => println!("{doc:55} -> {tipo:?}"),
        }
    }
}
