use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CustomerKind {
    Plain,
    /// Joins the shortest queue instead of the first one with room.
    Greedy,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Customer {
    id: usize,
    arrival_time: f64,
    kind: CustomerKind,
}

impl Customer {
    pub fn new(id: usize, arrival_time: f64) -> Self {
        Self {
            id,
            arrival_time,
            kind: CustomerKind::Plain,
        }
    }

    pub fn greedy(id: usize, arrival_time: f64) -> Self {
        Self {
            id,
            arrival_time,
            kind: CustomerKind::Greedy,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn kind(&self) -> CustomerKind {
        self.kind
    }

    pub fn is_greedy(&self) -> bool {
        self.kind == CustomerKind::Greedy
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CustomerKind::Plain => write!(f, "{}", self.id),
            CustomerKind::Greedy => write!(f, "{}(greedy)", self.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_mark_greedy_customers() {
        assert_eq!(Customer::new(3, 0.0).to_string(), "3");
        assert_eq!(Customer::greedy(4, 1.5).to_string(), "4(greedy)");
    }

    #[test]
    fn kind_does_not_change_stored_data() {
        let plain = Customer::new(7, 2.25);
        let greedy = Customer::greedy(7, 2.25);
        assert_eq!(plain.id(), greedy.id());
        assert_eq!(plain.arrival_time(), greedy.arrival_time());
        assert!(!plain.is_greedy());
        assert!(greedy.is_greedy());
    }
}
