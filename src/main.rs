
use fourierlab::basis::basissystem::{
    BasisSystem,
    SYSTEM_ORDER
};
use fourierlab::configuration::{
    example_functions,
    system_config
};

const MAX_K: usize = 5;
const SAMPLE_COUNT: usize = 1000;

fn main() {
    for example in example_functions() {
        let (a, b) = example.domain();
        let points = example.sample(SAMPLE_COUNT);
        println!("{} on [{:.4}, {:.4}]", example.name(), a, b);

        for system_type in SYSTEM_ORDER {
            let system = BasisSystem::new(system_type);
            let coefs = system.
                compute_coefs(&points, a, b, MAX_K).
                unwrap();
            let config = system_config(system_type);

            print!("  {:<22} c0 = {:+.4}", config.label(), coefs.c0());
            for (family, family_config) in coefs.families().iter().zip(config.families()) {
                for (index, coef) in family.coefs().iter().enumerate() {
                    print!("  {}{} = {:+.4}", family_config.coef_prefix(), index + 1, coef);
                }
            }
            println!();

            let approx = system.approximation(&coefs);
            let mid = (a + b) / 2.0;
            println!(
                "  {:<22} f({:.4}) = {:.4}, approx = {:.4}",
                "",
                mid,
                example.eval(mid),
                approx.value(mid).unwrap()
            );
        }
        println!();
    }
}
