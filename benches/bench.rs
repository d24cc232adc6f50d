use criterion::{criterion_group, criterion_main};

mod identifier_benchmark {
    use criterion::{black_box, Criterion};
    use iin_validator::{validate, validate_identifier};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let identifiers = vec![
            // primary pass
            "010101600001",
            "920701123456",
            // secondary pass
            "010101000005",
            // both passes fail
            "010101999999",
            // rejected before the checksum
            "131301000000",
            "010132000000",
            "123",
        ];
        c.bench_function("iin-validate", |b| {
            b.iter(|| {
                for identifier in identifiers.iter() {
                    validate(black_box(identifier));
                }
            })
        });
        c.bench_function("iin-validate-detailed", |b| {
            b.iter(|| {
                for identifier in identifiers.iter() {
                    let _ = validate_identifier(black_box(identifier));
                }
            })
        });
    }
}

mod pattern_benchmark {
    use criterion::{black_box, BenchmarkId, Criterion};
    use iin_validator::{SecondaryValidator, Validator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let inputs = vec![
            (SecondaryValidator::RussianPhoneNumber, "+7(999)123-45-67"),
            (SecondaryValidator::KyrgyzPhoneNumber, "+996 550 64-47-72"),
            (SecondaryValidator::GmailAddress, "john.doe@gmail.com"),
        ];
        let mut group = c.benchmark_group("patterns");
        for (validator, input) in inputs {
            group.bench_with_input(
                BenchmarkId::from_parameter(validator.name()),
                &input,
                |b, input| b.iter(|| validator.is_valid_match(black_box(input))),
            );
        }
        group.finish();
    }
}

mod checker_benchmark {
    use criterion::{black_box, Criterion};
    use iin_validator::{Checker, CheckerConfig, Labels, SecondaryValidator};

    pub fn criterion_benchmark(c: &mut Criterion) {
        let checker = Checker::new(
            &CheckerConfig::new(SecondaryValidator::IinChecksum)
                .labels(Labels::new(&[("form", "bench")])),
        );
        c.bench_function("checker-iin", |b| {
            b.iter(|| {
                checker.check(black_box("920701123456"));
                checker.check(black_box("010101999999"));
            })
        });
    }
}

criterion_group!(
    benches,
    identifier_benchmark::criterion_benchmark,
    pattern_benchmark::criterion_benchmark,
    checker_benchmark::criterion_benchmark
);
criterion_main!(benches);
