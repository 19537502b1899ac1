//! Cost aggregation over a record view.

use crate::models::record::Record;
use crate::utils::money::format_price;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    /// Full-precision sum; round only when displaying.
    pub total: f64,
    /// Subtotal per item, in order of first appearance.
    pub by_category: Vec<(String, f64)>,
}

impl Summary {
    pub fn total_display(&self) -> String {
        format_price(self.total)
    }

    pub fn subtotal(&self, item: &str) -> Option<f64> {
        self.by_category
            .iter()
            .find(|(c, _)| c == item)
            .map(|(_, v)| *v)
    }
}

pub fn summarize<'a, I>(records: I) -> Summary
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = Summary::default();

    for r in records {
        out.count += 1;
        out.total += r.price;

        match out.by_category.iter_mut().find(|(c, _)| *c == r.item) {
            Some((_, sub)) => *sub += r.price,
            None => out.by_category.push((r.item.clone(), r.price)),
        }
    }

    out
}
