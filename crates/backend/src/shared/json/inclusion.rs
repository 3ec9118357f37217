//! Правила включения полей
//!
//! Фильтр работает на уровне полей структур: `Serializer`-обёртка над
//! `serde_json::value::Serializer` пропускает поле в
//! `SerializeStruct::serialize_field`. Элементы массивов, записи map и
//! содержимое вариантов перечислений не удаляются, но вложенные в них
//! структуры фильтруются по тем же правилам.

use serde::ser::{self, Serialize, Serializer};
use serde_json::value::Serializer as ValueSerializer;
use serde_json::{Error, Value};

/// Правило включения полей объекта в вывод
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    /// Без null и пустых строк, массивов, объектов
    NonEmpty,
    /// Как NonEmpty, плюс без `false` и нулевых чисел в примитивных полях
    NonDefault,
}

impl Inclusion {
    /// JSON-дерево значения с пропуском полей по правилу
    ///
    /// Корневое значение остаётся на месте, даже если оно пустое.
    pub fn to_value<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, Error> {
        value
            .serialize(FieldFilter { inclusion: self })
            .map(|filtered| filtered.value)
    }

    fn is_excluded(self, field: &Filtered) -> bool {
        let empty = match &field.value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        };
        match self {
            Inclusion::NonEmpty => empty,
            Inclusion::NonDefault => {
                empty || (field.origin == Origin::Primitive && is_primitive_default(&field.value))
            }
        }
    }
}

fn is_primitive_default(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

/// Чем было значение до превращения в JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// bool, число, строка, `None`, unit
    Primitive,
    /// Структура, коллекция, newtype, вариант с данными
    Composite,
    /// Unit-вариант перечисления с его именем
    UnitVariant(&'static str),
}

struct Filtered {
    value: Value,
    origin: Origin,
}

impl Filtered {
    fn primitive(value: Value) -> Self {
        Self {
            value,
            origin: Origin::Primitive,
        }
    }

    fn composite(value: Value) -> Self {
        Self {
            value,
            origin: Origin::Composite,
        }
    }
}

#[derive(Clone, Copy)]
struct FieldFilter {
    inclusion: Inclusion,
}

impl FieldFilter {
    fn filter<T: Serialize + ?Sized>(self, value: &T) -> Result<Value, Error> {
        value.serialize(self).map(|filtered| filtered.value)
    }
}

type Inner = ValueSerializer;

macro_rules! primitive {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(
            fn $method(self, v: $ty) -> Result<Filtered, Error> {
                ValueSerializer.$method(v).map(Filtered::primitive)
            }
        )*
    };
}

impl Serializer for FieldFilter {
    type Ok = Filtered;
    type Error = Error;
    type SerializeSeq = SeqFilter<<Inner as Serializer>::SerializeSeq>;
    type SerializeTuple = SeqFilter<<Inner as Serializer>::SerializeTuple>;
    type SerializeTupleStruct = SeqFilter<<Inner as Serializer>::SerializeTupleStruct>;
    type SerializeTupleVariant = SeqFilter<<Inner as Serializer>::SerializeTupleVariant>;
    type SerializeMap = MapFilter;
    type SerializeStruct = StructFilter;
    type SerializeStructVariant = VariantFilter;

    primitive! {
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_f32: f32,
        serialize_f64: f64,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
    }

    fn serialize_none(self) -> Result<Filtered, Error> {
        Ok(Filtered::primitive(Value::Null))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<Filtered, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Filtered, Error> {
        Ok(Filtered::primitive(Value::Null))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Filtered, Error> {
        Ok(Filtered::primitive(Value::Null))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
    ) -> Result<Filtered, Error> {
        let value = ValueSerializer.serialize_unit_variant(name, variant_index, variant)?;
        Ok(Filtered {
            value,
            origin: Origin::UnitVariant(name),
        })
    }

    // Коды перечислений пишутся через newtype: `0` у значения перечисления
    // не является значением по умолчанию примитива.
    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Filtered, Error> {
        self.filter(value).map(Filtered::composite)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Filtered, Error> {
        let inner = self.filter(value)?;
        ValueSerializer
            .serialize_newtype_variant(name, variant_index, variant, &inner)
            .map(Filtered::composite)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Ok(SeqFilter {
            filter: self,
            inner: ValueSerializer.serialize_seq(len)?,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple, Error> {
        Ok(SeqFilter {
            filter: self,
            inner: ValueSerializer.serialize_tuple(len)?,
        })
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Ok(SeqFilter {
            filter: self,
            inner: ValueSerializer.serialize_tuple_struct(name, len)?,
        })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Ok(SeqFilter {
            filter: self,
            inner: ValueSerializer.serialize_tuple_variant(name, variant_index, variant, len)?,
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<MapFilter, Error> {
        Ok(MapFilter {
            filter: self,
            inner: ValueSerializer.serialize_map(len)?,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<StructFilter, Error> {
        Ok(StructFilter {
            filter: self,
            name,
            first: true,
            enum_content: false,
            inner: ValueSerializer.serialize_struct(name, len)?,
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantFilter, Error> {
        Ok(VariantFilter {
            filter: self,
            inner: ValueSerializer.serialize_struct_variant(name, variant_index, variant, len)?,
        })
    }
}

/// Последовательности и кортежи: элементы сохраняются все
struct SeqFilter<S> {
    filter: FieldFilter,
    inner: S,
}

macro_rules! seq_filter {
    ($($trait:ident :: $method:ident),* $(,)?) => {
        $(
            impl<S> ser::$trait for SeqFilter<S>
            where
                S: ser::$trait<Ok = Value, Error = Error>,
            {
                type Ok = Filtered;
                type Error = Error;

                fn $method<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
                    let value = self.filter.filter(value)?;
                    self.inner.$method(&value)
                }

                fn end(self) -> Result<Filtered, Error> {
                    self.inner.end().map(Filtered::composite)
                }
            }
        )*
    };
}

seq_filter! {
    SerializeSeq::serialize_element,
    SerializeTuple::serialize_element,
    SerializeTupleStruct::serialize_field,
    SerializeTupleVariant::serialize_field,
}

/// Map: записи сохраняются все, ключи пишет serde_json
struct MapFilter {
    filter: FieldFilter,
    inner: <Inner as Serializer>::SerializeMap,
}

impl ser::SerializeMap for MapFilter {
    type Ok = Filtered;
    type Error = Error;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), Error> {
        self.inner.serialize_key(key)
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), Error> {
        let value = self.filter.filter(value)?;
        self.inner.serialize_value(&value)
    }

    fn end(self) -> Result<Filtered, Error> {
        self.inner.end().map(Filtered::composite)
    }
}

/// Поля структуры: здесь и применяется правило включения
struct StructFilter {
    filter: FieldFilter,
    name: &'static str,
    first: bool,
    /// Перечисление с `tag` + `content`: serde пишет его как структуру с
    /// именем перечисления, первым полем идёт unit-вариант того же типа.
    enum_content: bool,
    inner: <Inner as Serializer>::SerializeStruct,
}

impl ser::SerializeStruct for StructFilter {
    type Ok = Filtered;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        let field = value.serialize(self.filter)?;
        if self.first {
            self.first = false;
            self.enum_content = field.origin == Origin::UnitVariant(self.name);
        }
        if self.enum_content || !self.filter.inclusion.is_excluded(&field) {
            self.inner.serialize_field(key, &field.value)?;
        }
        Ok(())
    }

    fn end(self) -> Result<Filtered, Error> {
        self.inner.end().map(Filtered::composite)
    }
}

/// Поля варианта перечисления: содержимое варианта не фильтруется
struct VariantFilter {
    filter: FieldFilter,
    inner: <Inner as Serializer>::SerializeStructVariant,
}

impl ser::SerializeStructVariant for VariantFilter {
    type Ok = Filtered;
    type Error = Error;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        let value = self.filter.filter(value)?;
        self.inner.serialize_field(key, &value)
    }

    fn end(self) -> Result<Filtered, Error> {
        self.inner.end().map(Filtered::composite)
    }
}
