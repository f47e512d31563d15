/// Трейт для корня агрегата
///
/// Каждая коллекция хранится плоским JSON-массивом под ключом `collection_name()`.
pub trait AggregateRoot {
    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    /// Получить ID записи (например, "ADV-1717171717", "PED-4821")
    fn id(&self) -> &str;

    /// Проверка записи на границе загрузки
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    // ============================================================================
    // Метаданные класса агрегата
    // ============================================================================

    /// Индекс агрегата в системе (например, "a003")
    fn aggregate_index() -> &'static str;

    /// Ключ коллекции в хранилище (например, "advances")
    fn collection_name() -> &'static str;

    /// Полное имя агрегата (например, "a003_advances")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
