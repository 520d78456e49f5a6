use std::fmt;

/// Axis-aligned box in template pixel space; `max` is exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn from_rect(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + i64::from(width),
            max_y: y + i64::from(height),
        }
    }

    /// Component-wise union.
    pub fn merge(self, other: Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> u64 {
        (self.max_x - self.min_x).max(0) as u64
    }

    pub fn height(&self) -> u64 {
        (self.max_y - self.min_y).max(0) as u64
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Merge an iterator of boxes, `None` when it is empty.
pub fn union<I: IntoIterator<Item = Bounds>>(boxes: I) -> Option<Bounds> {
    boxes.into_iter().reduce(Bounds::merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn merge_is_component_wise() {
        let a = Bounds::from_rect(0, 10, 60, 30);
        let b = Bounds::from_rect(-20, 20, 10, 50);
        let merged = a.merge(b);
        assert_eq!(merged, Bounds {
            min_x: -20,
            min_y: 10,
            max_x: 60,
            max_y: 70
        });
        assert_eq!((merged.width(), merged.height()), (80, 60));
        assert_eq!(merged.to_string(), "(-20, 10) -> (60, 70)");
    }

    #[test]
    fn union_of_nothing() {
        assert_eq!(union(Vec::new()), None);
        assert_eq!(
            union([Bounds::from_rect(1, 2, 3, 4)]),
            Some(Bounds::from_rect(1, 2, 3, 4))
        );
    }
}
