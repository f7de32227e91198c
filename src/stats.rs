use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
    total_customers: usize,
    served: usize,
    total_wait_time: f64,
}

impl Statistics {
    pub fn new(total_customers: usize) -> Self {
        Self {
            total_customers,
            served: 0,
            total_wait_time: 0.0,
        }
    }

    #[must_use]
    pub fn increment_served(self) -> Self {
        Self {
            served: self.served + 1,
            ..self
        }
    }

    #[must_use]
    pub fn add_wait_time(self, wait: f64) -> Self {
        Self {
            total_wait_time: self.total_wait_time + wait,
            ..self
        }
    }

    pub fn total_customers(&self) -> usize {
        self.total_customers
    }

    pub fn served(&self) -> usize {
        self.served
    }

    pub fn left(&self) -> usize {
        self.total_customers.saturating_sub(self.served)
    }

    pub fn total_wait_time(&self) -> f64 {
        self.total_wait_time
    }

    /// Mean wait over every served customer, zero-wait ones included.
    pub fn average_wait(&self) -> f64 {
        if self.served == 0 {
            0.0
        } else {
            self.total_wait_time / self.served as f64
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3} {} {}]",
            self.average_wait(),
            self.served,
            self.left()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_run_reports_zero_average() {
        let stats = Statistics::new(3);
        assert_eq!(stats.average_wait(), 0.0);
        assert_eq!(stats.to_string(), "[0.000 0 3]");
    }

    #[test]
    fn transitions_return_new_values() {
        let start = Statistics::new(2);
        let next = start.increment_served().add_wait_time(1.5);
        assert_eq!(start.served(), 0);
        assert_eq!(next.served(), 1);
        assert_eq!(next.total_wait_time(), 1.5);
        assert_eq!(next.left(), 1);
    }

    #[test]
    fn average_spans_all_served_customers() {
        let stats = Statistics::new(3)
            .increment_served()
            .increment_served()
            .add_wait_time(4.0);
        assert_eq!(stats.average_wait(), 2.0);
        assert_eq!(stats.to_string(), "[2.000 2 1]");
    }

    #[test]
    fn summary_rounds_to_three_decimals() {
        let stats = Statistics::new(3)
            .increment_served()
            .increment_served()
            .increment_served()
            .add_wait_time(5.0);
        assert_eq!(stats.to_string(), "[1.667 3 0]");
    }
}
