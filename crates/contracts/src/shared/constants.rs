//! Бизнес-константы контрактов Techo Propio.

/// Цена, выставляемая технической организации за один установленный модуль
pub const MODULE_BILLING_RATE: f64 = 1350.0;

/// Количество дверей в одном модуле
pub const DOORS_PER_MODULE: i64 = 5;

/// Организация для записей без известной организации
pub const GENERAL_ENTITY: &str = "GENERAL";

/// Тарифы с этим маркером считаются монтажом в недельном отчёте
pub const INSTALLATION_MARKER: &str = "instal";

/// Более узкий маркер для счетов и прогресса организаций ("instalación", "instalar")
pub const INSTALLATION_BILLING_MARKER: &str = "instala";

/// Имя работника в выпуске, если работник не найден
pub const UNKNOWN_WORKER: &str = "Desconocido";

/// Описание тарифа в выпуске, если тариф не найден
pub const SPECIAL_RATE: &str = "Especial";
