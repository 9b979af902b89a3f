use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;

#[derive(Clone, Copy, Debug)]
pub struct FieldWiringEnvironment<'a> {
    pub(crate) field_definition: &'a Field,
    pub(crate) parent_type: &'a ObjectType,
}
impl<'a> FieldWiringEnvironment<'a> {
    pub fn field_definition(&self) -> &'a Field {
        self.field_definition
    }

    pub fn parent_type(&self) -> &'a ObjectType {
        self.parent_type
    }
}

#[derive(Clone, Copy, Debug)]
pub struct InterfaceWiringEnvironment<'a> {
    pub(crate) interface_type: &'a InterfaceType,
}
impl<'a> InterfaceWiringEnvironment<'a> {
    pub fn interface_type(&self) -> &'a InterfaceType {
        self.interface_type
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ScalarWiringEnvironment<'a> {
    pub(crate) scalar_type: &'a ScalarType,
}
impl<'a> ScalarWiringEnvironment<'a> {
    pub fn scalar_type(&self) -> &'a ScalarType {
        self.scalar_type
    }
}

#[derive(Clone, Copy, Debug)]
pub struct UnionWiringEnvironment<'a> {
    pub(crate) union_type: &'a UnionType,
}
impl<'a> UnionWiringEnvironment<'a> {
    pub fn union_type(&self) -> &'a UnionType {
        self.union_type
    }
}
