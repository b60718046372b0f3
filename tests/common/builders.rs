use typewise_alert::{battery::BatteryCharacter, temperature::CoolingType};

/// Builder for creating BatteryCharacter test instances
pub struct TestBatteryBuilder {
    cooling_type: CoolingType,
    brand: String,
}

impl TestBatteryBuilder {
    pub fn new() -> Self {
        Self { cooling_type: CoolingType::PassiveCooling, brand: "TestBrand".to_string() }
    }

    pub fn cooling_type(mut self, cooling_type: CoolingType) -> Self {
        self.cooling_type = cooling_type;
        self
    }

    #[allow(dead_code)]
    pub fn brand(mut self, brand: &str) -> Self {
        self.brand = brand.to_string();
        self
    }

    pub fn build(self) -> BatteryCharacter {
        BatteryCharacter::new(self.cooling_type, self.brand)
    }
}
