use std::io::Write;
use anyhow::Result;
use itertools::Itertools;

use crate::aggregate::{solve, DeliverySummary};
use crate::data::delivery::*;
use crate::render::GridMap;

/// Result of one test case, ready for output.
pub struct CaseReport<'a> {
    /// 1-based position in the batch.
    pub index: usize,
    pub instance: &'a DeliveryInstance,
    pub summary: DeliverySummary,
    pub grid: GridMap,
}

impl<'a> CaseReport<'a> {
    pub fn new(index: usize, instance: &'a DeliveryInstance) -> Self {
        CaseReport {
            index,
            instance,
            summary: solve(instance),
            grid: GridMap::of_instance(instance),
        }
    }

    pub fn write_text(&self, mut buf: impl Write, show_grid: bool) -> Result<()> {
        writeln!(buf, "Test Case {}:", self.index)?;
        writeln!(buf, "Total minimum time required: {} time units", self.summary.total_time)?;
        if show_grid {
            writeln!(buf, "Grid with Restaurants and Orders:")?;
            write!(buf, "{}", self.grid)?;
        }
        writeln!(buf)?;
        Ok(())
    }

    pub fn to_json(&self) -> json::JsonValue {
        let restaurants = self.instance.restaurants.iter()
            .enumerate()
            .map(|(k, r)| {
                let orders = self.instance.listed_orders(k).iter()
                    .map(|o| json::object! {
                        name: o.name.as_str(),
                        location: o.location,
                        delivery_time_limit: o.delivery_time_limit,
                    })
                    .collect_vec();
                json::object! {
                    name: r.name.as_str(),
                    location: r.location,
                    orders: orders,
                }
            })
            .collect_vec();

        return json::object! {
            id: self.instance.id.as_str(),
            grid_size: self.instance.n,
            riders: self.instance.riders,
            dispatch: self.summary.dispatch.as_str(),
            total_time: self.summary.total_time,
            restaurant_times: self.summary.restaurant_times.clone(),
            restaurants: restaurants,
        };
    }

    pub fn to_json_summary(&self) -> json::JsonValue {
        return json::object! {
            id: self.instance.id.as_str(),
            total_time: self.summary.total_time,
        };
    }
}

/// Solve every case of `batch`, or only the 1-based case `only`.
pub fn report_batch(batch: &Batch, only: Option<usize>) -> Vec<CaseReport<'_>> {
    batch.cases.iter()
        .enumerate()
        .map(|(k, case)| (k + 1, case))
        .filter(|(index, _)| only.map_or(true, |o| o == *index))
        .map(|(index, case)| CaseReport::new(index, case))
        .collect_vec()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_batch;

    const BATCH: &str = "2
3 1 1
Pizzeria 5 1
alice 1 10
3 2 2
Ramen 1 1
bob 1 0
Tacos 9 1
carol 9 0
";

    #[test]
    fn text_output() -> Result<()> {
        let batch = parse_batch(BATCH, "sample")?;
        let reports = report_batch(&batch, None);
        assert_eq!(reports.len(), 2);

        let mut buf = Vec::new();
        reports[0].write_text(&mut buf, true)?;
        let expected = concat!(
            "Test Case 1:\n",
            "Total minimum time required: 4 time units\n",
            "Grid with Restaurants and Orders:\n",
            "  0   -   - \n",
            "  -   R   - \n",
            "  -   -   - \n",
            "\n",
        );
        assert_eq!(String::from_utf8(buf)?, expected);

        let mut buf = Vec::new();
        reports[1].write_text(&mut buf, false)?;
        assert_eq!(String::from_utf8(buf)?, "Test Case 2:\nTotal minimum time required: 0 time units\n\n");
        Ok(())
    }

    #[test]
    fn select_one_case() -> Result<()> {
        let batch = parse_batch(BATCH, "sample")?;
        let reports = report_batch(&batch, Some(2));
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].index, 2);
        assert!(report_batch(&batch, Some(3)).is_empty());
        Ok(())
    }

    #[test]
    fn json_output() -> Result<()> {
        let batch = parse_batch(BATCH, "sample")?;
        let reports = report_batch(&batch, None);
        let full = reports[1].to_json();
        assert_eq!(full["id"], "sample#2");
        assert_eq!(full["dispatch"], "rider_per_restaurant");
        assert_eq!(full["total_time"], 0);
        assert_eq!(full["restaurants"][1]["name"], "Tacos");
        assert_eq!(full["restaurants"][1]["orders"][0]["location"], 9);
        assert_eq!(full["restaurant_times"].len(), 2);

        let summary = reports[0].to_json_summary();
        assert_eq!(summary["total_time"], 4);
        Ok(())
    }
}
