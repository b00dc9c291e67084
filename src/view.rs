//! Serializable projection of a tableau for renderers.
//!
//! A renderer needs the domino list and the row/column lengths, nothing of
//! the insertion machinery. Field names follow the JSON shape drawing code
//! reads: `dominoList` entries carry `n`, `x`, `y` and exactly one of
//! `horizontal`, `box` or `zero`; `dominoGrid` carries `rowLengths` and
//! `columnLengths`.

use serde::{Deserialize, Serialize};

use crate::domino::{Domino, DominoShape};
use crate::tableau::Tableau;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DominoView {
    pub n: u64,
    pub x: usize,
    pub y: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<bool>,
    #[serde(rename = "box", default, skip_serializing_if = "Option::is_none")]
    pub boxed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zero: Option<bool>,
}

impl From<&Domino> for DominoView {
    fn from(domino: &Domino) -> Self {
        let mut view = DominoView {
            n: domino.content,
            x: domino.x,
            y: domino.y,
            horizontal: None,
            boxed: None,
            zero: None,
        };
        match domino.shape {
            DominoShape::Horizontal => view.horizontal = Some(true),
            DominoShape::Vertical => view.horizontal = Some(false),
            DominoShape::Box => view.boxed = Some(true),
            DominoShape::ZeroSquare => view.zero = Some(true),
        }
        return view;
    }
}

impl From<&DominoView> for Domino {
    fn from(view: &DominoView) -> Self {
        let shape = if view.boxed == Some(true) {
            DominoShape::Box
        } else if view.zero == Some(true) {
            DominoShape::ZeroSquare
        } else if view.horizontal == Some(true) {
            DominoShape::Horizontal
        } else {
            DominoShape::Vertical
        };
        return Domino { content: view.n, x: view.x, y: view.y, shape };
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridView {
    pub row_lengths: Vec<usize>,
    pub column_lengths: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableauView {
    pub domino_list: Vec<DominoView>,
    pub domino_grid: GridView,
}

impl TableauView {
    /// Rebuild a tableau from a projection.
    ///
    /// Where listed dominoes overlap, the smaller content covers the cell and
    /// the larger one comes back displaced, as the bump left it.
    pub fn to_tableau(&self) -> Tableau {
        return Tableau::from_dominoes(self.domino_list.iter().map(Domino::from).collect());
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        return serde_json::to_string(self);
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        return serde_json::to_string_pretty(self);
    }
}

impl From<&Tableau> for TableauView {
    fn from(tableau: &Tableau) -> Self {
        return TableauView {
            domino_list: tableau.dominoes().map(DominoView::from).collect(),
            domino_grid: GridView {
                row_lengths: tableau.row_lengths().to_vec(),
                column_lengths: tableau.column_lengths().to_vec(),
            },
        };
    }
}

impl Tableau {
    /// The read-only projection handed to renderers.
    pub fn view(&self) -> TableauView {
        return TableauView::from(self);
    }
}
