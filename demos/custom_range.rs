use thermogauge::config::RangeConfig;
use thermogauge::{Gauge, GaugeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A wider Celsius band than the room default, built with the
    // bon-generated builder
    let config = GaugeConfig::builder()
        .title("Server Room".to_string())
        .range(RangeConfig {
            min_temp: 10.0,
            normal_low: 18.0,
            normal_high: 24.0,
            max_temp: 35.0,
        })
        .build();

    let mut gauge = Gauge::new(config);
    gauge.show()
}
