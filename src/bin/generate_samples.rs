//! Write a deterministic set of sample price lists into `price_lists/`
//! for trying out the interactive search by hand.

use std::fs;
use std::path::Path;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in [lo, hi), rounded to two decimals.
    fn price(&mut self, lo: f64, hi: f64) -> f64 {
        let v = lo + self.next_f64() * (hi - lo);
        (v * 100.0).round() / 100.0
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

const WEIGHTS: &[f64] = &[0.3, 0.5, 1.0, 2.0, 5.0];

const GROCERY: &[&str] = &[
    "молоко", "сыр твердый", "сырок плавленый", "творог", "масло сливочное",
    "хлеб ржаной", "гречка", "рис круглый", "сахар", "чай черный",
];

const MEAT_AND_FISH: &[&str] = &[
    "говядина", "свинина", "курица охлажденная", "колбаса вареная",
    "рыба мороженая", "сельдь соленая",
];

fn write_price_list(
    dir: &Path,
    file_name: &str,
    headers: &[&str],
    products: &[&str],
    rng: &mut SimpleRng,
) {
    let path = dir.join(file_name);
    let mut writer = csv::Writer::from_path(&path).expect("Failed to create sample file");
    writer.write_record(headers).expect("Failed to write headers");

    for product in products {
        let price = rng.price(30.0, 900.0);
        let weight = *rng.pick(WEIGHTS);
        // Cells follow the header layout of this file.
        let row: Vec<String> = headers
            .iter()
            .map(|header| match *header {
                "название" | "продукт" | "товар" | "наименование" => product.to_string(),
                "цена" | "розница" => format!("{price}"),
                "вес" | "масса" | "фасовка" => format!("{weight}"),
                "артикул" => format!("{}", 1000 + (rng.next_u64() % 9000)),
                other => other.to_string(),
            })
            .collect();
        writer.write_record(&row).expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush sample file");
    println!("Wrote {}", path.display());
}

fn main() {
    let dir = Path::new("price_lists");
    fs::create_dir_all(dir).expect("Failed to create price_lists directory");

    let mut rng = SimpleRng::new(7);

    write_price_list(
        dir,
        "price_grocery.csv",
        &["название", "цена", "вес"],
        GROCERY,
        &mut rng,
    );
    write_price_list(
        dir,
        "price_market.csv",
        &["артикул", "товар", "розница", "фасовка"],
        MEAT_AND_FISH,
        &mut rng,
    );
    write_price_list(
        dir,
        "weekly_prices.txt",
        &["наименование", "масса", "цена"],
        GROCERY,
        &mut rng,
    );

    // A candidate lacking a weight column: loaded files warn and skip it.
    fs::write(
        dir.join("price_broken.csv"),
        "товар,цена\nмолоко,80\nсыр,600\n",
    )
    .expect("Failed to write price_broken.csv");

    // Conforming extension but no "price" marker: reported as non-conforming.
    fs::write(dir.join("data.csv"), "товар,цена,вес\nмолоко,80,1\n")
        .expect("Failed to write data.csv");

    println!("Sample price lists ready in {}", dir.display());
}
