/// Builds threshold strings in `+<delta>%/<time frame><unit>` form
#[derive(Debug, Clone)]
pub struct TestThresholdBuilder {
    delta: String,
    time_frame: Option<String>,
    unit: String,
}

impl Default for TestThresholdBuilder {
    fn default() -> Self {
        Self { delta: "10".to_string(), time_frame: Some("5".to_string()), unit: "s".to_string() }
    }
}

impl TestThresholdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delta(mut self, delta: &str) -> Self {
        self.delta = delta.to_string();
        self
    }

    pub fn time_frame(mut self, time_frame: &str) -> Self {
        self.time_frame = Some(time_frame.to_string());
        self
    }

    pub fn without_time_frame(mut self) -> Self {
        self.time_frame = None;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    pub fn build(&self) -> String {
        format!("+{}%/{}{}", self.delta, self.time_frame.as_deref().unwrap_or(""), self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        assert_eq!(TestThresholdBuilder::new().build(), "+10%/5s");
        assert_eq!(TestThresholdBuilder::new().without_time_frame().unit("m").build(), "+10%/m");
    }
}
