use serde::Serialize;

pub const DEFAULT_FORMATION: &str = "4-4-2";
pub const SLOTS_PER_TEMPLATE: usize = 11;

/// Normalized pitch position, both axes in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
}

const fn s(x: f32, y: f32) -> Slot {
    Slot { x, y }
}

/// Canonical home-side slots, goalkeeper first, then each line from defense to attack.
#[derive(Debug, PartialEq)]
pub struct FormationTemplate {
    pub key: &'static str,
    pub slots: [Slot; SLOTS_PER_TEMPLATE],
}

#[rustfmt::skip]
pub static FORMATION_TEMPLATES: &[FormationTemplate] = &[
    FormationTemplate {
        key: "4-4-2",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(20.0, 66.0), s(40.0, 66.0), s(60.0, 66.0), s(80.0, 66.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-3-3",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(25.0, 66.0), s(50.0, 66.0), s(75.0, 66.0),
            s(25.0, 54.0), s(50.0, 54.0), s(75.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-2-3-1",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(33.3, 70.0), s(66.7, 70.0),
            s(25.0, 62.0), s(50.0, 62.0), s(75.0, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-4-1-1",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(20.0, 70.0), s(40.0, 70.0), s(60.0, 70.0), s(80.0, 70.0),
            s(50.0, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-1-4-1",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(50.0, 70.0),
            s(20.0, 62.0), s(40.0, 62.0), s(60.0, 62.0), s(80.0, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-5-1",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(16.7, 66.0), s(33.3, 66.0), s(50.0, 66.0), s(66.7, 66.0), s(83.3, 66.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-3-2-1",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(25.0, 70.0), s(50.0, 70.0), s(75.0, 70.0),
            s(33.3, 62.0), s(66.7, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-1-2-1-2",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(50.0, 72.0),
            s(33.3, 66.0), s(66.7, 66.0),
            s(50.0, 60.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-2-2-2",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(33.3, 70.0), s(66.7, 70.0),
            s(33.3, 62.0), s(66.7, 62.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-3-1-2",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(25.0, 70.0), s(50.0, 70.0), s(75.0, 70.0),
            s(50.0, 62.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-1-3-2",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(50.0, 70.0),
            s(25.0, 62.0), s(50.0, 62.0), s(75.0, 62.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "4-2-4",
        slots: [
            s(50.0, 92.0),
            s(20.0, 78.0), s(40.0, 78.0), s(60.0, 78.0), s(80.0, 78.0),
            s(33.3, 66.0), s(66.7, 66.0),
            s(20.0, 54.0), s(40.0, 54.0), s(60.0, 54.0), s(80.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-5-2",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(16.7, 66.0), s(33.3, 66.0), s(50.0, 66.0), s(66.7, 66.0), s(83.3, 66.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-4-3",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(20.0, 66.0), s(40.0, 66.0), s(60.0, 66.0), s(80.0, 66.0),
            s(25.0, 54.0), s(50.0, 54.0), s(75.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-4-2-1",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(20.0, 70.0), s(40.0, 70.0), s(60.0, 70.0), s(80.0, 70.0),
            s(33.3, 62.0), s(66.7, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-4-1-2",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(20.0, 70.0), s(40.0, 70.0), s(60.0, 70.0), s(80.0, 70.0),
            s(50.0, 62.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-1-4-2",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(50.0, 70.0),
            s(20.0, 62.0), s(40.0, 62.0), s(60.0, 62.0), s(80.0, 62.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-5-1-1",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(16.7, 70.0), s(33.3, 70.0), s(50.0, 70.0), s(66.7, 70.0), s(83.3, 70.0),
            s(50.0, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "3-2-4-1",
        slots: [
            s(50.0, 92.0),
            s(25.0, 78.0), s(50.0, 78.0), s(75.0, 78.0),
            s(33.3, 70.0), s(66.7, 70.0),
            s(20.0, 62.0), s(40.0, 62.0), s(60.0, 62.0), s(80.0, 62.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "5-3-2",
        slots: [
            s(50.0, 92.0),
            s(16.7, 78.0), s(33.3, 78.0), s(50.0, 78.0), s(66.7, 78.0), s(83.3, 78.0),
            s(25.0, 66.0), s(50.0, 66.0), s(75.0, 66.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
    FormationTemplate {
        key: "5-4-1",
        slots: [
            s(50.0, 92.0),
            s(16.7, 78.0), s(33.3, 78.0), s(50.0, 78.0), s(66.7, 78.0), s(83.3, 78.0),
            s(20.0, 66.0), s(40.0, 66.0), s(60.0, 66.0), s(80.0, 66.0),
            s(50.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "5-2-3",
        slots: [
            s(50.0, 92.0),
            s(16.7, 78.0), s(33.3, 78.0), s(50.0, 78.0), s(66.7, 78.0), s(83.3, 78.0),
            s(33.3, 66.0), s(66.7, 66.0),
            s(25.0, 54.0), s(50.0, 54.0), s(75.0, 54.0),
        ],
    },
    FormationTemplate {
        key: "5-2-1-2",
        slots: [
            s(50.0, 92.0),
            s(16.7, 78.0), s(33.3, 78.0), s(50.0, 78.0), s(66.7, 78.0), s(83.3, 78.0),
            s(33.3, 70.0), s(66.7, 70.0),
            s(50.0, 62.0),
            s(33.3, 54.0), s(66.7, 54.0),
        ],
    },
];

#[must_use]
pub fn find_template(key: &str) -> Option<&'static FormationTemplate> {
    FORMATION_TEMPLATES.iter().find(|t| t.key == key)
}

#[must_use]
pub fn default_template() -> &'static FormationTemplate {
    // the default key is always present in the table
    find_template(DEFAULT_FORMATION).unwrap_or(&FORMATION_TEMPLATES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_and_sum_to_ten_outfielders() {
        let mut seen = std::collections::HashSet::new();
        for template in FORMATION_TEMPLATES {
            assert!(seen.insert(template.key), "duplicate key {}", template.key);
            let outfield: u32 = template
                .key
                .split('-')
                .map(|p| p.parse::<u32>().unwrap())
                .sum();
            assert_eq!(outfield, 10, "{}", template.key);
        }
    }

    #[test]
    fn slots_stay_on_the_home_half() {
        for template in FORMATION_TEMPLATES {
            for slot in &template.slots {
                assert!((0.0..=100.0).contains(&slot.x));
                assert!((50.0..=100.0).contains(&slot.y), "{}", template.key);
            }
            assert!(template.slots[0].y > template.slots[1].y);
        }
    }

    #[test]
    fn default_is_four_four_two() {
        assert_eq!(default_template().key, "4-4-2");
    }
}
