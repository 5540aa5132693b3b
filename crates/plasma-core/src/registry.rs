//! Class-alias registry consulted by codecs.
//!
//! Each registered class declares its wire alias and its ordered static
//! attribute set, and can be instantiated with every field defaulted so a
//! decoder can instantiate-then-populate.

use crate::io::{ArrayCollection, ObjectProxy};
use crate::messages::{
    AsyncFields, CommandFields, ErrorFields, Message, MessageKind, RemotingFields, SmallMessage,
    SmallParts,
};

pub const MESSAGES_NAMESPACE: &str = "flex.messaging.messages";
pub const IO_NAMESPACE: &str = "flex.messaging.io";

/// Key a codec writes the alias under when tagging a record.
pub const ALIAS_KEY: &str = "_explicitType";

/// A defaulted instance of a registered class.
#[derive(Debug, Clone, PartialEq)]
pub enum Instance {
    Message(Message),
    Small(SmallMessage),
    ArrayCollection(ArrayCollection),
    ObjectProxy(ObjectProxy),
}

/// Registration record for one class.
#[derive(Debug)]
pub struct ClassDef {
    pub alias: &'static str,
    pub static_attrs: &'static [&'static str],
    new: fn() -> Instance,
}

impl ClassDef {
    /// Instance with every field defaulted.
    pub fn instantiate(&self) -> Instance {
        (self.new)()
    }
}

const ABSTRACT_ATTRS: &[&str] = &[
    "body",
    "clientId",
    "destination",
    "headers",
    "messageId",
    "timestamp",
    "timeToLive",
];

const ASYNC_ATTRS: &[&str] = &[
    "body",
    "clientId",
    "destination",
    "headers",
    "messageId",
    "timestamp",
    "timeToLive",
    "correlationId",
];

const COMMAND_ATTRS: &[&str] = &[
    "body",
    "clientId",
    "destination",
    "headers",
    "messageId",
    "timestamp",
    "timeToLive",
    "correlationId",
    "operation",
];

const ERROR_ATTRS: &[&str] = &[
    "body",
    "clientId",
    "destination",
    "headers",
    "messageId",
    "timestamp",
    "timeToLive",
    "correlationId",
    "extendedData",
    "faultCode",
    "faultDetail",
    "faultString",
    "rootCause",
];

const REMOTING_ATTRS: &[&str] = &[
    "body",
    "clientId",
    "destination",
    "headers",
    "messageId",
    "timestamp",
    "timeToLive",
    "operation",
    "source",
];

pub static ABSTRACT_MESSAGE: ClassDef = ClassDef {
    alias: "flex.messaging.messages.AbstractMessage",
    static_attrs: ABSTRACT_ATTRS,
    new: || Instance::Message(Message::new(MessageKind::Abstract)),
};

pub static ASYNC_MESSAGE: ClassDef = ClassDef {
    alias: "flex.messaging.messages.AsyncMessage",
    static_attrs: ASYNC_ATTRS,
    new: || Instance::Message(Message::async_message()),
};

pub static ACKNOWLEDGE_MESSAGE: ClassDef = ClassDef {
    alias: "flex.messaging.messages.AcknowledgeMessage",
    static_attrs: ASYNC_ATTRS,
    new: || Instance::Message(Message::acknowledge_message()),
};

pub static COMMAND_MESSAGE: ClassDef = ClassDef {
    alias: "flex.messaging.messages.CommandMessage",
    static_attrs: COMMAND_ATTRS,
    new: || Instance::Message(Message::new(MessageKind::Command(CommandFields::default()))),
};

pub static ERROR_MESSAGE: ClassDef = ClassDef {
    alias: "flex.messaging.messages.ErrorMessage",
    static_attrs: ERROR_ATTRS,
    new: || Instance::Message(Message::error_message(ErrorFields::default())),
};

pub static REMOTING_MESSAGE: ClassDef = ClassDef {
    alias: "flex.messaging.messages.RemotingMessage",
    static_attrs: REMOTING_ATTRS,
    new: || Instance::Message(Message::new(MessageKind::Remoting(RemotingFields::default()))),
};

pub static ASYNC_MESSAGE_EXT: ClassDef = ClassDef {
    alias: "DSA",
    static_attrs: ASYNC_ATTRS,
    new: || {
        Instance::Small(SmallMessage::AsyncExt(SmallParts {
            envelope: Default::default(),
            fields: AsyncFields::default(),
        }))
    },
};

pub static ACKNOWLEDGE_MESSAGE_EXT: ClassDef = ClassDef {
    alias: "DSK",
    static_attrs: ASYNC_ATTRS,
    new: || {
        Instance::Small(SmallMessage::AcknowledgeExt(SmallParts {
            envelope: Default::default(),
            fields: AsyncFields::default(),
        }))
    },
};

pub static COMMAND_MESSAGE_EXT: ClassDef = ClassDef {
    alias: "DSC",
    static_attrs: COMMAND_ATTRS,
    new: || {
        Instance::Small(SmallMessage::CommandExt(SmallParts {
            envelope: Default::default(),
            fields: CommandFields::default(),
        }))
    },
};

pub static ARRAY_COLLECTION: ClassDef = ClassDef {
    alias: "flex.messaging.io.ArrayCollection",
    static_attrs: &["source"],
    new: || Instance::ArrayCollection(ArrayCollection::new()),
};

pub static OBJECT_PROXY: ClassDef = ClassDef {
    alias: "flex.messaging.io.ObjectProxy",
    static_attrs: &[],
    new: || Instance::ObjectProxy(ObjectProxy::default()),
};

static CLASSES: [&ClassDef; 11] = [
    &ABSTRACT_MESSAGE,
    &ASYNC_MESSAGE,
    &ACKNOWLEDGE_MESSAGE,
    &COMMAND_MESSAGE,
    &ERROR_MESSAGE,
    &REMOTING_MESSAGE,
    &ASYNC_MESSAGE_EXT,
    &ACKNOWLEDGE_MESSAGE_EXT,
    &COMMAND_MESSAGE_EXT,
    &ARRAY_COLLECTION,
    &OBJECT_PROXY,
];

/// Every registered class.
pub fn classes() -> impl Iterator<Item = &'static ClassDef> {
    CLASSES.iter().copied()
}

pub fn lookup(alias: &str) -> Option<&'static ClassDef> {
    classes().find(|def| def.alias == alias)
}

/// Defaulted instance of the class registered under `alias`.
pub fn instantiate(alias: &str) -> Option<Instance> {
    lookup(alias).map(ClassDef::instantiate)
}

impl ArrayCollection {
    pub fn class_def() -> &'static ClassDef {
        &ARRAY_COLLECTION
    }
}

impl ObjectProxy {
    pub fn class_def() -> &'static ClassDef {
        &OBJECT_PROXY
    }
}
