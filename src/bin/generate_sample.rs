use chrono::{Duration, NaiveDate, NaiveDateTime};

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

    fn range(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const STATIONS: [(u32, &str, f64, f64); 8] = [
    (72, "W 52 St & 11 Ave", 40.76727, -73.99393),
    (79, "Franklin St & W Broadway", 40.71912, -74.00667),
    (82, "St James Pl & Pearl St", 40.71117, -74.00017),
    (116, "W 17 St & 8 Ave", 40.74178, -74.00150),
    (127, "Barrow St & Hudson St", 40.73172, -74.00674),
    (146, "Hudson St & Reade St", 40.71625, -74.00916),
    (173, "Broadway & W 49 St", 40.76068, -73.98442),
    (195, "Liberty St & Broadway", 40.70905, -74.01044),
];

fn format_time(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let output_path = "data.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");

    // The loader only consumes a subset of these; stoptime is here so the
    // sample exercises the projection as well.
    writer
        .write_record([
            "tripduration",
            "starttime",
            "stoptime",
            "start.station.id",
            "start.station.name",
            "start.station.latitude",
            "start.station.longitude",
            "end.station.id",
            "end.station.name",
            "end.station.latitude",
            "end.station.longitude",
            "bikeid",
            "usertype",
            "birth.year",
            "gender",
        ])
        .expect("Failed to write header");

    // Trips roll forward from a Monday morning with random gaps, so the
    // output is time-ordered like a real export.
    let mut clock: NaiveDateTime = NaiveDate::from_ymd_opt(2019, 7, 1)
        .unwrap()
        .and_hms_opt(5, 30, 0)
        .unwrap();

    let trip_count = 500;
    for _ in 0..trip_count {
        clock += Duration::seconds(60 + rng.range(1500) as i64);

        let start = STATIONS[rng.range(STATIONS.len())];
        let end = STATIONS[rng.range(STATIONS.len())];

        let duration = rng.gauss(660.0, 320.0).max(90.0) as i64;
        let stop = clock + Duration::seconds(duration);

        let subscriber = rng.next_f64() < 0.8;
        let usertype = if subscriber { "Subscriber" } else { "Customer" };

        // Casual riders often leave the rider fields blank.
        let (birth_year, gender) = if subscriber || rng.next_f64() < 0.3 {
            let year = 1955 + rng.range(48) as i32;
            let gender = 1 + rng.range(2);
            (year.to_string(), gender.to_string())
        } else {
            (String::new(), "0".to_string())
        };

        let bike_id = 14_000 + rng.range(5_000) as u32;

        writer
            .write_record([
                duration.to_string(),
                format_time(clock),
                format_time(stop),
                start.0.to_string(),
                start.1.to_string(),
                format!("{:.5}", start.2),
                format!("{:.5}", start.3),
                end.0.to_string(),
                end.1.to_string(),
                format!("{:.5}", end.2),
                format!("{:.5}", end.3),
                bike_id.to_string(),
                usertype.to_string(),
                birth_year,
                gender,
            ])
            .expect("Failed to write record");
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {trip_count} trips to {output_path}");
}
