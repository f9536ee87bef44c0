// ============================================================
// Layer 4 - Example Dataset Registry
// ============================================================
// The names of the bundled example datasets and where to fetch
// them. The CSV files live in the public seaborn-data repository;
// the loader downloads one the first time it is asked for and
// reads it from the local cache afterwards.
//
// Some columns are ordered categories rather than free text.
// Their level order matters (it is the order a model sees when the
// column is code-encoded), and it cannot be recovered from the CSV
// alone, so it is recorded here:
//
//   diamonds.cut     Ideal > Premium > Very Good > Good > Fair
//   diamonds.color   D (best) ... J (worst)
//   diamonds.clarity IF > VVS1 > VVS2 > VS1 > VS2 > SI1 > SI2 > I1

use crate::domain::error::FrameError;

/// Raw file host for the example datasets
pub const BASE_URL: &str = "https://raw.githubusercontent.com/mwaskom/seaborn-data/master";

/// A column whose values form a fixed, ordered set of levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedCategory {
    pub column: &'static str,
    pub levels: &'static [&'static str],
}

/// One entry of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    pub name:       &'static str,
    pub categories: &'static [OrderedCategory],
}

impl DatasetSpec {
    pub fn url(&self) -> String {
        format!("{BASE_URL}/{}.csv", self.name)
    }

    /// Name of the cached file inside the data home
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }

    pub fn category(&self, column: &str) -> Option<&'static OrderedCategory> {
        self.categories.iter().find(|c| c.column == column)
    }
}

const fn plain(name: &'static str) -> DatasetSpec {
    DatasetSpec { name, categories: &[] }
}

const DIAMONDS: &[OrderedCategory] = &[
    OrderedCategory {
        column: "cut",
        levels: &["Ideal", "Premium", "Very Good", "Good", "Fair"],
    },
    OrderedCategory {
        column: "color",
        levels: &["D", "E", "F", "G", "H", "I", "J"],
    },
    OrderedCategory {
        column: "clarity",
        levels: &["IF", "VVS1", "VVS2", "VS1", "VS2", "SI1", "SI2", "I1"],
    },
];

const TIPS: &[OrderedCategory] = &[
    OrderedCategory { column: "sex",    levels: &["Male", "Female"] },
    OrderedCategory { column: "smoker", levels: &["Yes", "No"] },
    OrderedCategory { column: "day",    levels: &["Thur", "Fri", "Sat", "Sun"] },
    OrderedCategory { column: "time",   levels: &["Lunch", "Dinner"] },
];

const TITANIC: &[OrderedCategory] = &[
    OrderedCategory { column: "class", levels: &["First", "Second", "Third"] },
    OrderedCategory { column: "deck",  levels: &["A", "B", "C", "D", "E", "F", "G"] },
];

const FLIGHTS: &[OrderedCategory] = &[OrderedCategory {
    column: "month",
    levels: &[
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
}];

/// Sorted by name, matching the listing of the upstream repository.
const DATASETS: &[DatasetSpec] = &[
    plain("anagrams"),
    plain("anscombe"),
    plain("attention"),
    plain("brain_networks"),
    plain("car_crashes"),
    DatasetSpec { name: "diamonds", categories: DIAMONDS },
    plain("dots"),
    plain("dowjones"),
    plain("exercise"),
    DatasetSpec { name: "flights", categories: FLIGHTS },
    plain("fmri"),
    plain("geyser"),
    plain("glue"),
    plain("healthexp"),
    plain("iris"),
    plain("mpg"),
    plain("penguins"),
    plain("planets"),
    plain("seaice"),
    plain("taxis"),
    DatasetSpec { name: "tips", categories: TIPS },
    DatasetSpec { name: "titanic", categories: TITANIC },
];

/// All registered dataset names
pub fn names() -> impl Iterator<Item = &'static str> {
    DATASETS.iter().map(|d| d.name)
}

/// Find a dataset by exact name.
pub fn lookup(name: &str) -> Result<&'static DatasetSpec, FrameError> {
    DATASETS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| FrameError::UnknownDataset(name.to_string()))
}
