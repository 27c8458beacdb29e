//! Fixed bookkeeping entities every generated watcher carries.
//!
//! These shapes are versioned with the generator, not derived from any
//! contract or schema.

use super::{
    column::{ADDRESS_LENGTH, HASH_LENGTH},
    Cardinality, Column, ColumnKind, Derivation, Entity, Index, Relation, Source,
};
use crate::ty::{storage, target};

pub const BLOCK_PROGRESS: &str = "BlockProgress";
pub const CONTRACT: &str = "Contract";
pub const EVENT: &str = "Event";
pub const STATE: &str = "State";
pub const STATE_SYNC_STATUS: &str = "StateSyncStatus";
pub const SYNC_STATUS: &str = "SyncStatus";

/// Holds records that are not yet final. Only generated alongside an
/// imported object schema.
pub const FROTHY_ENTITY: &str = "FrothyEntity";

/// Class names of the system entities, in emission order.
pub fn class_names(with_frothy: bool) -> impl Iterator<Item = &'static str> {
    [
        EVENT,
        SYNC_STATUS,
        CONTRACT,
        BLOCK_PROGRESS,
        STATE,
        STATE_SYNC_STATUS,
    ]
    .into_iter()
    .chain(with_frothy.then_some(FROTHY_ENTITY))
}

/// Builds every system entity, in emission order.
pub fn entities(with_frothy: bool) -> Vec<Entity> {
    let mut entities = vec![
        event(),
        sync_status(),
        contract(),
        block_progress(),
        state(),
        state_sync_status(),
    ];

    if with_frothy {
        entities.push(frothy_entity());
    }

    for entity in &mut entities {
        entity.refresh_capabilities();
    }

    entities
}

fn id() -> Column {
    Column::integer("id").kind(ColumnKind::PrimaryGenerated)
}

fn hash(name: &str) -> Column {
    Column::string(name).length(HASH_LENGTH)
}

fn address(name: &str) -> Column {
    Column::string(name).length(ADDRESS_LENGTH)
}

fn block_relation() -> Relation {
    Relation {
        field: "block".to_string(),
        entity: BLOCK_PROGRESS.to_string(),
        cardinality: Cardinality::One,
        derivation: Derivation::Stored,
    }
}

fn event() -> Entity {
    let mut entity = Entity::new(EVENT, Source::System);

    entity.columns = vec![
        id(),
        hash("txHash"),
        Column::integer("index"),
        address("contract"),
        Column::string("eventName").length(256),
        Column::text("eventInfo"),
        Column::text("extraInfo"),
        Column::text("proof"),
    ];
    entity.relations = vec![block_relation()];
    entity.indices = vec![
        Index::new(["block", "contract"], false),
        Index::new(["block", "contract", "eventName"], false),
    ];

    entity
}

fn sync_status() -> Entity {
    let mut entity = Entity::new(SYNC_STATUS, Source::System);

    entity.columns = vec![id()];
    for prefix in [
        "chainHead",
        "latestIndexed",
        "latestProcessed",
        "latestCanonical",
        "initialIndexed",
    ] {
        entity.columns.push(hash(&format!("{prefix}BlockHash")));
        entity
            .columns
            .push(Column::integer(format!("{prefix}BlockNumber")));
    }
    entity
        .columns
        .push(Column::boolean("hasIndexingError").default_value("false"));

    entity
}

fn contract() -> Entity {
    let mut entity = Entity::new(CONTRACT, Source::System);

    entity.columns = vec![
        id(),
        address("address"),
        Column::string("kind"),
        Column::boolean("checkpoint"),
        Column::integer("startingBlock"),
        Column::new("context", target::Type::String, storage::Type::Jsonb).nullable(true),
    ];
    entity.indices = vec![Index::new(["address"], true)];

    entity
}

fn block_progress() -> Entity {
    let mut entity = Entity::new(BLOCK_PROGRESS, Source::System);

    entity.columns = vec![
        id(),
        Column::string("cid").nullable(true),
        hash("blockHash"),
        hash("parentHash"),
        Column::integer("blockNumber"),
        Column::integer("blockTimestamp"),
        Column::integer("numEvents"),
        Column::integer("numProcessedEvents"),
        Column::integer("lastProcessedEventIndex"),
        Column::boolean("isComplete"),
        Column::boolean("isPruned").default_value("false"),
        Column::new("createdAt", target::Type::Date, storage::Type::Timestamp)
            .kind(ColumnKind::CreateDate),
    ];
    entity.indices = vec![
        Index::new(["blockHash"], true),
        Index::new(["blockNumber"], false),
        Index::new(["parentHash"], false),
    ];

    entity
}

fn state() -> Entity {
    let mut entity = Entity::new(STATE, Source::System);

    entity.columns = vec![
        id(),
        address("contractAddress"),
        Column::string("cid"),
        Column::string("kind"),
        Column::new("data", target::Type::Buffer, storage::Type::Bytea),
    ];
    entity.relations = vec![block_relation()];
    entity.indices = vec![
        Index::new(["cid"], true),
        Index::new(["block", "contractAddress"], false),
        Index::new(["block", "contractAddress", "kind"], true),
    ];

    entity
}

fn state_sync_status() -> Entity {
    let mut entity = Entity::new(STATE_SYNC_STATUS, Source::System);

    entity.columns = vec![
        id(),
        Column::integer("latestIndexedBlockNumber"),
        Column::integer("latestCheckpointBlockNumber").nullable(true),
    ];

    entity
}

fn frothy_entity() -> Entity {
    let mut entity = Entity::new(FROTHY_ENTITY, Source::System);

    entity.columns = vec![
        Column::string("id").kind(ColumnKind::Primary),
        Column::string("name").kind(ColumnKind::Primary),
        hash("blockHash").kind(ColumnKind::Primary),
        Column::integer("blockNumber"),
    ];
    entity.indices = vec![Index::new(["blockNumber"], false)];

    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Capability;

    #[test]
    fn names_match_entities() {
        for with_frothy in [false, true] {
            let names: Vec<_> = class_names(with_frothy).collect();
            let built: Vec<_> = entities(with_frothy)
                .into_iter()
                .map(|entity| entity.class_name)
                .collect();

            assert_eq!(names, built);
        }
    }

    #[test]
    fn frothy_only_on_request() {
        assert!(!class_names(false).any(|name| name == FROTHY_ENTITY));
        assert!(class_names(true).any(|name| name == FROTHY_ENTITY));
    }

    #[test]
    fn block_relations() {
        for entity in entities(false) {
            let expect = entity.class_name == EVENT || entity.class_name == STATE;
            assert_eq!(entity.has_capability(Capability::Relations), expect);
            assert_eq!(entity.relation("block").is_some(), expect);
        }
    }
}
