use std::any::type_name;
use std::fmt;

use contracts::domain::common::with_reference_mode;
use contracts::shared::patch::JsonPatch;
use contracts::shared::polymorphic::{with_type_info, CLASS_PROPERTY};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::inclusion::Inclusion;

/// Ошибки кодека
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("write to json string error: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("parse json string error: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("json string is blank")]
    Blank,

    #[error("json value is not an object")]
    NotAnObject,
}

/// Именованные конфигурации JSON-кодека
///
/// Все варианты при чтении игнорируют неизвестные поля.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonCodec {
    /// Только не-null и непустые поля; для внешних интерфейсов
    NonEmpty,
    /// Только поля, отличные от значений по умолчанию; самый компактный
    NonDefault,
    /// Как NonDefault, плюс `@class` в полиморфных полях (`Box<dyn Trait>`)
    DefaultTyping,
    /// Как NonDefault, ссылки на модельные объекты пишутся идентификатором
    ModelObject,
}

impl JsonCodec {
    pub fn all() -> &'static [JsonCodec] {
        &[
            JsonCodec::NonEmpty,
            JsonCodec::NonDefault,
            JsonCodec::DefaultTyping,
            JsonCodec::ModelObject,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            JsonCodec::NonEmpty => "non_empty",
            JsonCodec::NonDefault => "non_default",
            JsonCodec::DefaultTyping => "default_typing",
            JsonCodec::ModelObject => "model_object",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn inclusion(&self) -> Inclusion {
        match self {
            JsonCodec::NonEmpty => Inclusion::NonEmpty,
            JsonCodec::NonDefault | JsonCodec::DefaultTyping | JsonCodec::ModelObject => {
                Inclusion::NonDefault
            }
        }
    }

    // ========================================================================
    // Запись
    // ========================================================================

    /// JSON-дерево значения с правилами этого кодека
    pub fn try_to_value<T: Serialize + ?Sized>(&self, value: &T) -> Result<Value, CodecError> {
        let inclusion = self.inclusion();
        match self {
            JsonCodec::ModelObject => with_reference_mode(|| inclusion.to_value(value)),
            JsonCodec::DefaultTyping => with_type_info(|| inclusion.to_value(value)),
            _ => inclusion.to_value(value),
        }
        .map_err(CodecError::Encode)
    }

    pub fn try_to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, CodecError> {
        let json = self.try_to_value(value)?;
        serde_json::to_string(&json).map_err(CodecError::Encode)
    }

    /// Объект, коллекция или массив в JSON; `None` с предупреждением в лог при ошибке
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Option<String> {
        self.try_to_json(value)
            .map_err(|e| self.warn_encode::<T>(&e))
            .ok()
    }

    /// То же с отступами
    pub fn to_json_pretty<T: Serialize + ?Sized>(&self, value: &T) -> Option<String> {
        self.try_to_value(value)
            .and_then(|json| serde_json::to_string_pretty(&json).map_err(CodecError::Encode))
            .map_err(|e| self.warn_encode::<T>(&e))
            .ok()
    }

    /// JSONP: `function_name(<json>)`
    pub fn to_json_p<T: Serialize + ?Sized>(&self, function_name: &str, value: &T) -> Option<String> {
        self.to_json(value)
            .map(|json| format!("{}({})", function_name, json))
    }

    // ========================================================================
    // Чтение
    // ========================================================================

    /// `Ok(None)` для пустой строки и литерала `null`
    pub fn try_from_json<T: DeserializeOwned>(&self, json: &str) -> Result<Option<T>, CodecError> {
        if json.trim().is_empty() {
            return Ok(None);
        }
        let value: Value = serde_json::from_str(json).map_err(CodecError::Decode)?;
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(CodecError::Decode)
    }

    /// POJO или коллекция из JSON; `None` для пустой строки, `null` и ошибок
    pub fn from_json<T: DeserializeOwned>(&self, json: &str) -> Option<T> {
        match self.try_from_json(json) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "parse json string error [{}] {}: {} ({})",
                    self,
                    type_name::<T>(),
                    e,
                    json
                );
                None
            }
        }
    }

    // ========================================================================
    // Частичное обновление
    // ========================================================================

    /// Перезаписать в `target` только поля верхнего уровня, присутствующие в JSON
    ///
    /// Остальные поля не сериализуются и не читаются заново. Неизвестные
    /// свойства и `@class` пропускаются. При ошибке `target` не меняется.
    pub fn try_update<T>(&self, json: &str, target: &mut T) -> Result<(), CodecError>
    where
        T: JsonPatch + Clone,
    {
        if json.trim().is_empty() {
            return Err(CodecError::Blank);
        }
        let patch = match serde_json::from_str(json).map_err(CodecError::Decode)? {
            Value::Object(fields) => fields,
            _ => return Err(CodecError::NotAnObject),
        };

        let mut updated = target.clone();
        for (name, value) in patch {
            if name == CLASS_PROPERTY {
                continue;
            }
            if !updated.patch_field(&name, value).map_err(CodecError::Decode)? {
                tracing::debug!("update {}: unknown property {}", type_name::<T>(), name);
            }
        }
        *target = updated;
        Ok(())
    }

    pub fn update<'a, T>(&self, json: &str, target: &'a mut T) -> Option<&'a mut T>
    where
        T: JsonPatch + Clone,
    {
        match self.try_update(json, target) {
            Ok(()) => Some(target),
            Err(e) => {
                tracing::warn!(
                    "update json string: {} to object: {} error [{}]: {}",
                    json,
                    type_name::<T>(),
                    self,
                    e
                );
                None
            }
        }
    }

    fn warn_encode<T: ?Sized>(&self, error: &CodecError) {
        tracing::warn!("write to json string error [{}] {}: {}", self, type_name::<T>(), error);
    }
}

impl fmt::Display for JsonCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for JsonCodec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        JsonCodec::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown json codec: {}", name)))
    }
}
