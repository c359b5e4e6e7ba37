use console::style;
use scanmap::corpus::numeric_strings;
use scanmap::report::Comparison;

/// Skip moduli for the five generated collections, with the letters the
/// report rows use to name them.
const COLLECTIONS: [(char, u64); 5] = [('B', 2), ('C', 3), ('D', 4), ('E', 5), ('F', 6)];

/// The seven pairs every block measures, as indices into [`COLLECTIONS`];
/// the first index names the probe side. An arbitrary selection, kept fixed
/// so runs stay comparable.
const PAIRS: [(usize, usize); 7] = [(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Comparing linear-scan and hash-set subset checks.");
    println!(
        "{}",
        style("Timing subset checks on string vectors and hash sets.").bold()
    );

    for len in (10..=100).step_by(10) {
        println!(
            "{}",
            style(format!("Examining string collections of length {len}.")).bold()
        );
        run_block(len);
        println!("-----");
    }

    log::info!("All comparisons finished.");
    Ok(())
}

/// Generates the five collections for one requested length and prints one
/// comparison row per (iteration count, pair) combination.
fn run_block(len: usize) {
    let collections: Vec<(char, Vec<String>)> = COLLECTIONS
        .iter()
        .map(|&(label, skip_modulus)| (label, numeric_strings(len, skip_modulus)))
        .collect();

    let sizes: Vec<usize> = collections.iter().map(|(_, strings)| strings.len()).collect();
    log::debug!("collection sizes after skipping for length {len}: {sizes:?}");

    for exponent in 3..=6_u32 {
        let iterations = 10_usize.pow(exponent);
        for &(probe_idx, haystack_idx) in &PAIRS {
            let (probe_label, probe) = &collections[probe_idx];
            let (haystack_label, haystack) = &collections[haystack_idx];
            let label = format!("{probe_label},{haystack_label}");
            println!("{}", Comparison::run(iterations, &label, probe, haystack));
        }
    }
}
