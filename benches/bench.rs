use criterion::{criterion_group, criterion_main};

mod luhn_checksum_benchmark {
    use checkmate::{LuhnChecksum, Validator};
    use criterion::{black_box, Criterion};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let credit_cards = vec![
            // source https://www.paypalobjects.com/en_AU/vhelp/paypalmanager_help/credit_card_numbers.htm
            // American Express
            "378282246310005",
            "371449635398431",
            // American Express Corporate
            "378734493671000",
            // Australian BankCard
            "5610591081018250",
            // Diners Club
            "30569309025904",
            "38520000023237",
            // Discover
            "6011111111111117",
            // JCB
            "3530111333300000",
            // MasterCard
            "5555555555554444",
            // Visa
            "4111111111111111",
            "4012888888881881",
            "4222222222222",
            // Dankort (PBS)
            "5019717010103742",
            // Switch/Solo (Paymentech)
            "6331101999990016",
        ];
        c.bench_function("luhn-checksum", |b| {
            b.iter(|| {
                for credit_card in credit_cards.iter() {
                    LuhnChecksum.is_valid_match(black_box(credit_card));
                }
            })
        });
    }
}

mod iban_benchmark {
    use checkmate::{IbanValidator, IdentifierValidator};
    use criterion::{black_box, BenchmarkId, Criterion};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let ibans = [
            ("de", "DE89 3704 0044 0532 0130 00"),
            ("gb", "GB29NWBK60161331926819"),
            ("mu", "MU17BOMM0101101030300200000MUR"),
            ("unknown-country", "US12345678901234567890"),
        ];
        let mut group = c.benchmark_group("iban");
        for (name, iban) in ibans {
            group.bench_with_input(BenchmarkId::from_parameter(name), iban, |b, iban| {
                b.iter(|| IbanValidator.is_valid(black_box(iban)))
            });
        }
        group.finish();
    }
}

mod isbn_jmbg_benchmark {
    use checkmate::{IdentifierValidator, IsbnValidator, JmbgValidator};
    use criterion::{black_box, Criterion};

    pub fn criterion_benchmark(c: &mut Criterion) {
        c.bench_function("isbn", |b| {
            b.iter(|| {
                let _ = IsbnValidator.is_valid(black_box("ISBN-13: 978-0-596-52068-7"));
                let _ = IsbnValidator.is_valid(black_box("0-596-52068-9"));
            })
        });
        c.bench_function("jmbg", |b| {
            b.iter(|| JmbgValidator.is_valid(black_box("0101006500006")))
        });
    }
}

criterion_group!(
    benches,
    luhn_checksum_benchmark::criterion_benchmark,
    iban_benchmark::criterion_benchmark,
    isbn_jmbg_benchmark::criterion_benchmark
);
criterion_main!(benches);
