use crate::region::types::{Hyperbox, Vector};

/// Per-dimension relation between a box range and the vertex of the
/// dominance cones being subtracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimRange {
    /// The range lies wholly on one side of the vertex component.
    Fixed { lo: f64, hi: f64 },
    /// The vertex component falls inside the range; the dimension still
    /// has to be branched into its `[lo, at]` and `[at, hi]` halves.
    Split { lo: f64, at: f64, hi: f64 },
}

/// A box classified against a point: its dimension ranges plus the
/// number of dimensions resolved below (`n_low`) and above (`n_high`)
/// the point.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBox {
    pub ranges: Vec<DimRange>,
    pub n_low: usize,
    pub n_high: usize,
}

impl ClassifiedBox {
    pub fn dimensions(&self) -> usize {
        self.ranges.len()
    }

    /// True when some dimensions lie strictly below and others strictly
    /// above the point: the box intersects neither cone as a whole.
    pub fn is_mixed(&self) -> bool {
        self.n_low > 0 && self.n_high > 0
    }

    pub fn is_inside_cone(&self) -> bool {
        let k = self.dimensions();
        self.n_low == k || self.n_high == k
    }
}

/// Classifies every dimension of `hbox` against `point`. A component
/// strictly below the box range marks the dimension "high", strictly
/// above marks it "low", anything else (including boundary contact)
/// straddles and becomes a `Split`.
pub fn classify(hbox: &Hyperbox, point: &[f64]) -> ClassifiedBox {
    let mut ranges = Vec::with_capacity(point.len());
    let mut n_low = 0;
    let mut n_high = 0;
    for (i, &v) in point.iter().enumerate() {
        let (lo, hi) = (hbox.min[i], hbox.max[i]);
        if v < lo {
            n_high += 1;
            ranges.push(DimRange::Fixed { lo, hi });
        } else if v > hi {
            n_low += 1;
            ranges.push(DimRange::Fixed { lo, hi });
        } else {
            ranges.push(DimRange::Split { lo, at: v, hi });
        }
    }
    ClassifiedBox {
        ranges,
        n_low,
        n_high,
    }
}

struct WorkItem {
    ranges: Vec<DimRange>,
    n_low: usize,
    n_high: usize,
    cursor: usize,
}

/// Partitions a classified box into the orthants that survive after
/// removing the two one-sided dominance cones of the point, using an
/// explicit worklist instead of recursion. A fully resolved orthant is
/// kept iff it is neither entirely below nor entirely above the point;
/// for `m` straddling dimensions this yields up to `2^m - 2` survivors.
/// Zero-volume survivors (vertex on a box boundary) are emitted as-is.
pub fn subtract_cones(classified: ClassifiedBox) -> Vec<(Vector, Vector)> {
    let k = classified.dimensions();
    let mut survivors = Vec::new();
    let mut worklist = vec![WorkItem {
        ranges: classified.ranges,
        n_low: classified.n_low,
        n_high: classified.n_high,
        cursor: 0,
    }];

    while let Some(item) = worklist.pop() {
        let split = item.ranges[item.cursor..]
            .iter()
            .position(|r| matches!(r, DimRange::Split { .. }))
            .map(|offset| item.cursor + offset);

        let Some(i) = split else {
            if item.n_low < k && item.n_high < k {
                survivors.push(corners(&item.ranges));
            }
            continue;
        };

        let DimRange::Split { lo, at, hi } = item.ranges[i] else {
            unreachable!("cursor scan only stops on Split ranges");
        };

        let mut low_half = item.ranges.clone();
        low_half[i] = DimRange::Fixed { lo, hi: at };
        worklist.push(WorkItem {
            ranges: low_half,
            n_low: item.n_low + 1,
            n_high: item.n_high,
            cursor: i + 1,
        });

        let mut high_half = item.ranges;
        high_half[i] = DimRange::Fixed { lo: at, hi };
        worklist.push(WorkItem {
            ranges: high_half,
            n_low: item.n_low,
            n_high: item.n_high + 1,
            cursor: i + 1,
        });
    }

    survivors
}

fn corners(ranges: &[DimRange]) -> (Vector, Vector) {
    let mut min = Vec::with_capacity(ranges.len());
    let mut max = Vec::with_capacity(ranges.len());
    for range in ranges {
        match *range {
            DimRange::Fixed { lo, hi } => {
                min.push(lo);
                max.push(hi);
            }
            DimRange::Split { .. } => {
                unreachable!("survivors have every dimension resolved");
            }
        }
    }
    (min, max)
}
