/// Содержит типы хранимых граммем слов
/// в виде `unit enum`-ов для упрощения хранения.
pub mod grammemes;

/// Операции над множествами граммем (`Tag`): пересечение, обновление,
/// согласование с числительными.
pub mod tag;
