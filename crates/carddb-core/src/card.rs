//! Mapping of CSV records onto Cockatrice card entries

use crate::category::{CardKind, Category};
use crate::error::Result;
use crate::record::Record;

/// Table row used for components whose `type` is exactly this value
const COMPONENT_TYPE: &str = "Component";

/// Columns joined, in order, to build the card's type line
const TYPE_FIELDS: &[&str] = &["school", "school1", "school2", "type"];

/// A single card in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    /// Set name
    pub set: String,
    /// Image reference carried on the set element (`<id>.png`)
    pub pic_url: String,
    pub manacost: String,
    /// Converted mana cost. Cockatrice reads both fields, so it always
    /// mirrors `manacost`.
    pub cmc: String,
    pub card_type: String,
    /// Power/toughness line, creatures only
    pub pt: Option<String>,
    /// Cockatrice table row the card is placed on
    pub tablerow: i8,
    pub text: String,
}

impl Card {
    /// Build a card from one record of a file of the given kind
    pub fn from_record(record: &Record, kind: CardKind) -> Result<Self> {
        let name = record.require("name")?.to_string();
        let set = record.require("set")?.to_string();
        let pic_url = format!("{}.png", record.require("id")?);

        let manacost = if kind.spell {
            record.require("level")?.to_string()
        } else {
            String::new()
        };

        let pt = if kind.creature {
            Some(format!(
                "{}/ AC{}",
                record.require("hp")?,
                record.require("ac")?
            ))
        } else {
            None
        };

        let text = if kind.creature {
            creature_text(record)?
        } else {
            record.require("desc")?.to_string()
        };

        Ok(Self {
            name,
            set,
            pic_url,
            cmc: manacost.clone(),
            manacost,
            card_type: type_line(record),
            pt,
            tablerow: table_row(record, kind.category)?,
            text,
        })
    }
}

/// Join whichever type columns the file has with single spaces.
///
/// Empty values still contribute a token, so `school=""` yields a leading
/// space.
pub fn type_line(record: &Record) -> String {
    TYPE_FIELDS
        .iter()
        .filter_map(|field| record.get(field))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Table row for a record, `-1` when the category is unknown
pub fn table_row(record: &Record, category: Category) -> Result<i8> {
    Ok(match category {
        Category::Component => {
            if record.require("type")? == COMPONENT_TYPE {
                0
            } else {
                1
            }
        }
        Category::Creature => 2,
        Category::Spell => 3,
        Category::Unknown => -1,
    })
}

fn creature_text(record: &Record) -> Result<String> {
    Ok(format!(
        "{} STR, {} DEX, {} CON, {} INT, {} WIS, {} CHA, {}",
        record.require("str")?,
        record.require("dex")?,
        record.require("con")?,
        record.require("int")?,
        record.require("wis")?,
        record.require("cha")?,
        record.require("desc")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::read_records_str;

    fn first_record(csv: &str, source: &str) -> Record {
        read_records_str(csv, source).unwrap().remove(0)
    }

    #[test]
    fn test_spell_card() {
        let record = first_record(
            "name,id,set,level,school,type,desc\nFireball,1,Core,3,Fire,Attack,Deals damage.\n",
            "spells.csv",
        );
        let card = Card::from_record(&record, Category::Spell.into()).unwrap();

        assert_eq!(card.name, "Fireball");
        assert_eq!(card.set, "Core");
        assert_eq!(card.pic_url, "1.png");
        assert_eq!(card.manacost, "3");
        assert_eq!(card.cmc, "3");
        assert_eq!(card.card_type, "Fire Attack");
        assert_eq!(card.pt, None);
        assert_eq!(card.tablerow, 3);
        assert_eq!(card.text, "Deals damage.");
    }

    #[test]
    fn test_creature_card() {
        let record = first_record(
            "name,id,set,hp,ac,str,dex,con,int,wis,cha,type,desc\n\
             Goblin,7,Core,7,15,8,14,10,10,8,8,Humanoid,Sneaky.\n",
            "creatures.csv",
        );
        let card = Card::from_record(&record, Category::Creature.into()).unwrap();

        assert_eq!(card.pt.as_deref(), Some("7/ AC15"));
        assert_eq!(
            card.text,
            "8 STR, 14 DEX, 10 CON, 10 INT, 8 WIS, 8 CHA, Sneaky."
        );
        assert_eq!(card.manacost, "");
        assert_eq!(card.cmc, "");
        assert_eq!(card.card_type, "Humanoid");
        assert_eq!(card.tablerow, 2);
    }

    #[test]
    fn test_creature_level_is_ignored() {
        let record = first_record(
            "name,id,set,level,hp,ac,str,dex,con,int,wis,cha,desc\n\
             Ogre,9,Core,5,59,11,19,8,16,5,7,7,Big.\n",
            "creatures.csv",
        );
        let card = Card::from_record(&record, Category::Creature.into()).unwrap();
        assert_eq!(card.manacost, "");
        assert_eq!(card.cmc, "");
    }

    #[test]
    fn test_component_table_rows() {
        let csv = "name,id,set,type,desc\n\
                   Bat Guano,1,Core,Component,Smelly.\n\
                   Focus,2,Core,Arcane Focus,Shiny.\n\
                   Lower,3,Core,component,Case matters.\n";
        let records = read_records_str(csv, "components.csv").unwrap();
        let rows: Vec<i8> = records
            .iter()
            .map(|r| Card::from_record(r, Category::Component.into()).unwrap().tablerow)
            .collect();

        assert_eq!(rows, vec![0, 1, 1]);
    }

    #[test]
    fn test_component_without_type_column() {
        let record = first_record("name,id,set,desc\nGuano,1,Core,Smelly.\n", "components.csv");
        let err = Card::from_record(&record, Category::Component.into()).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "type"));
    }

    #[test]
    fn test_unknown_category() {
        let record = first_record("name,id,set,desc\nThing,4,Core,Odd.\n", "items.csv");
        let card = Card::from_record(&record, Category::Unknown.into()).unwrap();

        assert_eq!(card.tablerow, -1);
        assert_eq!(card.text, "Odd.");
        assert_eq!(card.card_type, "");
        assert_eq!(card.pt, None);
    }

    #[test]
    fn test_type_line_skips_absent_columns() {
        let record = first_record("school,type\nFire,Attack\n", "spells.csv");
        assert_eq!(type_line(&record), "Fire Attack");
    }

    #[test]
    fn test_type_line_keeps_empty_tokens() {
        let record = first_record(
            "school,school1,school2,type\nFire,,Ice,Attack\n",
            "spells.csv",
        );
        assert_eq!(type_line(&record), "Fire  Ice Attack");

        let record = first_record("school,type\n,Attack\n", "spells.csv");
        assert_eq!(type_line(&record), " Attack");
    }

    #[test]
    fn test_type_line_uses_fixed_order() {
        let record = first_record("type,school2,school\nAttack,Ice,Fire\n", "spells.csv");
        assert_eq!(type_line(&record), "Fire Ice Attack");
    }

    #[test]
    fn test_missing_id() {
        let record = first_record("name,set,desc\nBolt,Core,Zap.\n", "spells.csv");
        let err = Card::from_record(&record, Category::Spell.into()).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "id"));
    }

    #[test]
    fn test_spell_without_level() {
        let record = first_record("name,id,set,desc\nBolt,1,Core,Zap.\n", "spells.csv");
        let err = Card::from_record(&record, Category::Spell.into()).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "level"));
    }

    #[test]
    fn test_spell_component_file_keeps_mana_cost() {
        let record = first_record(
            "name,id,set,level,type,desc\nGuano,1,Core,2,Component,Smelly.\n",
            "spell_components.csv",
        );
        let kind = CardKind::from_file_name("spell_components.csv");
        let card = Card::from_record(&record, kind).unwrap();

        assert_eq!(card.manacost, "2");
        assert_eq!(card.cmc, "2");
        assert_eq!(card.tablerow, 0);
        assert_eq!(card.pt, None);
        assert_eq!(card.text, "Smelly.");
    }

    #[test]
    fn test_creature_component_file_uses_creature_rules() {
        let record = first_record(
            "name,id,set,hp,ac,str,dex,con,int,wis,cha,type,desc\n\
             Golem,5,Core,30,17,18,9,20,3,11,1,Construct,Heavy.\n",
            "creature_components.csv",
        );
        let kind = CardKind::from_file_name("creature_components.csv");
        let card = Card::from_record(&record, kind).unwrap();

        assert_eq!(card.pt.as_deref(), Some("30/ AC17"));
        assert_eq!(card.text, "18 STR, 9 DEX, 20 CON, 3 INT, 11 WIS, 1 CHA, Heavy.");
        assert_eq!(card.manacost, "");
        assert_eq!(card.tablerow, 1);
    }

    #[test]
    fn test_creature_spell_file_gets_both_rules() {
        let record = first_record(
            "name,id,set,level,hp,ac,str,dex,con,int,wis,cha,desc\n\
             Imp,6,Core,1,4,13,6,17,13,11,12,14,Summoned.\n",
            "creature_spells.csv",
        );
        let kind = CardKind::from_file_name("creature_spells.csv");
        let card = Card::from_record(&record, kind).unwrap();

        assert_eq!(card.manacost, "1");
        assert_eq!(card.cmc, "1");
        assert_eq!(card.pt.as_deref(), Some("4/ AC13"));
        assert_eq!(card.tablerow, 2);
    }
}
