//! Minimal class and type-member table.
//!
//! The mismatch heuristics only need a small slice of the full symbol
//! table: class names and owners, superclass chains, singleton-class
//! links, and the identities of a handful of well-known symbols. Those
//! well-known symbols are pre-registered at fixed indices when the
//! table is created.

use std::fmt;

use rustc_hash::FxHashMap;

/// Synthetic name of the type member representing "the attached class
/// of a singleton".
pub const ATTACHED_CLASS_NAME: &str = "<AttachedClass>";

/// Name of the root-level loose boolean alias (accepts truthy values,
/// unlike the strict built-in `Bool`).
pub const LOOSE_BOOLEAN_NAME: &str = "Boolean";

/// Handle to a class or module.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ClassId(u32);

impl ClassId {
    #[inline]
    const fn new(raw: u32) -> Self {
        ClassId(raw)
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Handle to a type member (the definition site of a self type
/// parameter).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct MemberId(u32);

impl fmt::Debug for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemberId({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct ClassInfo {
    name: String,
    owner: ClassId,
    superclass: Option<ClassId>,
    /// The singleton class of this class, once materialized.
    singleton: Option<ClassId>,
    /// For singleton classes, the class they are attached to.
    attached: Option<ClassId>,
}

#[derive(Clone, Debug)]
struct MemberInfo {
    name: String,
    owner: ClassId,
}

/// Class and type-member storage with well-known symbols at fixed
/// indices.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    classes: Vec<ClassInfo>,
    members: Vec<MemberInfo>,
    /// Children of each class, indexed by name.
    children: FxHashMap<ClassId, FxHashMap<String, ClassId>>,
}

impl SymbolTable {
    /// The root namespace.
    pub const ROOT: ClassId = ClassId::new(0);
    /// The class of `nil`.
    pub const NIL_CLASS: ClassId = ClassId::new(1);
    /// The strict built-in boolean class.
    pub const BOOL: ClassId = ClassId::new(2);
    /// The one-argument generic container family.
    pub const LIST: ClassId = ClassId::new(3);
    /// Base class of runtime type objects (what a type literal
    /// evaluates to when used as a value).
    pub const TYPE_OBJECT: ClassId = ClassId::new(4);
    /// The root-level loose boolean alias.
    pub const LOOSE_BOOLEAN: ClassId = ClassId::new(5);

    /// Create a table with the well-known symbols registered.
    pub fn new() -> Self {
        let mut table = SymbolTable {
            classes: Vec::new(),
            members: Vec::new(),
            children: FxHashMap::default(),
        };
        // Order must match the fixed indices above.
        let root = table.push_class("<root>", ClassId::new(0), None, None);
        debug_assert!(root == Self::ROOT);
        table.define_class("NilClass", Self::ROOT, None);
        table.define_class("Bool", Self::ROOT, None);
        table.define_class("List", Self::ROOT, None);
        table.define_class("TypeObject", Self::ROOT, None);
        // Deliberately not a subclass of `Bool`: the alias admits any
        // truthy value, so it does not satisfy the strict boolean.
        table.define_class(LOOSE_BOOLEAN_NAME, Self::ROOT, None);
        table
    }

    fn push_class(
        &mut self,
        name: &str,
        owner: ClassId,
        superclass: Option<ClassId>,
        attached: Option<ClassId>,
    ) -> ClassId {
        let id = ClassId::new(self.classes.len() as u32);
        self.classes.push(ClassInfo {
            name: name.to_owned(),
            owner,
            superclass,
            singleton: None,
            attached,
        });
        id
    }

    /// Define a class under `owner`.
    pub fn define_class(
        &mut self,
        name: &str,
        owner: ClassId,
        superclass: Option<ClassId>,
    ) -> ClassId {
        let id = self.push_class(name, owner, superclass, None);
        self.children
            .entry(owner)
            .or_default()
            .insert(name.to_owned(), id);
        id
    }

    /// Materialize the singleton class of `of`, or return the existing
    /// one.
    pub fn define_singleton_class(&mut self, of: ClassId) -> ClassId {
        if let Some(existing) = self.classes[of.0 as usize].singleton {
            return existing;
        }
        let owner = self.classes[of.0 as usize].owner;
        let name = format!("<Class:{}>", self.name(of));
        let singleton = self.push_class(&name, owner, None, Some(of));
        self.classes[of.0 as usize].singleton = Some(singleton);
        singleton
    }

    /// The singleton class of `of`, if it has been materialized.
    pub fn lookup_singleton_class(&self, of: ClassId) -> Option<ClassId> {
        self.classes[of.0 as usize].singleton
    }

    /// The class a singleton class is attached to.
    pub fn attached_class(&self, singleton: ClassId) -> Option<ClassId> {
        self.classes[singleton.0 as usize].attached
    }

    /// Look up a direct child class of `owner` by name.
    pub fn lookup_class(&self, owner: ClassId, name: &str) -> Option<ClassId> {
        self.children.get(&owner)?.get(name).copied()
    }

    /// Name of a class.
    pub fn name(&self, class: ClassId) -> &str {
        &self.classes[class.0 as usize].name
    }

    /// Owner of a class.
    pub fn owner(&self, class: ClassId) -> ClassId {
        self.classes[class.0 as usize].owner
    }

    /// Walk the superclass chain (including `sub` itself) looking for
    /// `ancestor`.
    pub fn derives_from(&self, sub: ClassId, ancestor: ClassId) -> bool {
        let mut current = Some(sub);
        while let Some(class) = current {
            if class == ancestor {
                return true;
            }
            current = self.classes[class.0 as usize].superclass;
        }
        false
    }

    /// Define a type member (self type parameter definition) on
    /// `owner`.
    pub fn define_type_member(&mut self, name: &str, owner: ClassId) -> MemberId {
        let id = MemberId(self.members.len() as u32);
        self.members.push(MemberInfo {
            name: name.to_owned(),
            owner,
        });
        id
    }

    /// Name of a type member.
    pub fn member_name(&self, member: MemberId) -> &str {
        &self.members[member.0 as usize].name
    }

    /// Owner of a type member.
    pub fn member_owner(&self, member: MemberId) -> ClassId {
        self.members[member.0 as usize].owner
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
