use crate::error::{LightreeError, Result};

/// Startup parameters for a formation. Tuning rates live in `constants`.
#[derive(Clone, Debug)]
pub struct FormationConfig {
    pub seed: u64,
    pub tree_height: f32,
    pub tree_radius: f32,
    pub gold_count: usize,
    pub dust_count: usize,
    pub date_text: String,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tree_height: 14.0,
            tree_radius: 6.0,
            gold_count: 1200,
            dust_count: 600,
            date_text: "20251225".to_string(),
        }
    }
}

impl FormationConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.tree_height.is_finite() && self.tree_height > 0.0) {
            return Err(LightreeError::InvalidConfig(format!(
                "tree_height must be positive, got {}",
                self.tree_height
            )));
        }
        if !(self.tree_radius.is_finite() && self.tree_radius > 0.0) {
            return Err(LightreeError::InvalidConfig(format!(
                "tree_radius must be positive, got {}",
                self.tree_radius
            )));
        }
        if self.gold_count + self.dust_count == 0 {
            return Err(LightreeError::InvalidConfig(
                "formation needs at least one gold or dust particle".into(),
            ));
        }
        if self.date_text.is_empty() || !self.date_text.is_ascii() {
            return Err(LightreeError::InvalidConfig(format!(
                "date_text must be non-empty ASCII, got {:?}",
                self.date_text
            )));
        }
        Ok(())
    }
}
