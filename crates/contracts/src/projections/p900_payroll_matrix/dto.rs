use serde::{Deserialize, Serialize};

/// Типизированная ячейка таблицы выгрузки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Blank,
    Text(String),
    Integer(i64),
    Currency(f64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

/// Блок колонок одного работника: (задача, количество, подытог)
pub const WORKER_BLOCK_WIDTH: usize = 3;

/// Ведущие колонки: тариф, цена тарифа, дата
pub const LEADING_COLUMNS: usize = 3;

/// Матрица выгрузки планильи
///
/// Колонки: справочник тарифов (`Tarifa`, `Precio`), `Fecha`, затем по блоку
/// (задача, количество, подытог) на работника. Последняя строка содержит итоги по работникам.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMatrix {
    /// Имена работников в порядке колонок
    pub workers: Vec<String>,
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
    pub totals: Vec<Cell>,
}

impl ExportMatrix {
    pub fn width(&self) -> usize {
        LEADING_COLUMNS + self.workers.len() * WORKER_BLOCK_WIDTH
    }

    /// Первая колонка блока работника
    pub fn worker_column(&self, worker_index: usize) -> usize {
        LEADING_COLUMNS + worker_index * WORKER_BLOCK_WIDTH
    }

    /// Заголовок, тело и итоги в порядке вывода
    pub fn all_rows(&self) -> impl Iterator<Item = &Vec<Cell>> {
        std::iter::once(&self.header)
            .chain(self.rows.iter())
            .chain(std::iter::once(&self.totals))
    }
}
