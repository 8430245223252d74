use crate::types::profile::Category;
use serde::Serialize;

pub type Points = f64;

/// Maximum points each category contributes to the completion percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryWeights {
    pub basic_info: Points,
    pub contact: Points,
    pub address: Points,
    pub professional: Points,
    pub education: Points,
    pub work: Points,
    pub bio: Points,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            basic_info: 20.0,
            contact: 15.0,
            address: 15.0,
            professional: 15.0,
            education: 20.0,
            work: 10.0,
            bio: 5.0,
        }
    }
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> Points {
        match category {
            Category::BasicInfo => self.basic_info,
            Category::Contact => self.contact,
            Category::Address => self.address,
            Category::Professional => self.professional,
            Category::Education => self.education,
            Category::Work => self.work,
            Category::Bio => self.bio,
        }
    }

    pub fn total(&self) -> Points {
        Category::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }
}
