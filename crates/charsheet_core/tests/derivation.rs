use charsheet_core::derive::{
    DamageBonuses, DiceSize, Derived, armor_damage_bonuses, attack_dice, defense_base,
    defense_bonus, defense_total, dice_size, parry_dice, speed_bonus, total_speed,
};
use charsheet_core::{Armor, CharacterRecord};

#[test]
fn attack_dice_is_monotonic_and_bounded() {
    let mut previous = attack_dice(-1_000);
    for strength in -1_000..=1_000 {
        let dice = attack_dice(strength);
        assert!((1..=8).contains(&dice), "strength {strength} gave {dice}");
        assert!(dice >= previous, "attack dice dropped at strength {strength}");
        previous = dice;
    }
}

#[test]
fn parry_dice_is_monotonic_and_bounded() {
    let mut previous = parry_dice(-1_000);
    for speed in -1_000..=1_000 {
        let dice = parry_dice(speed);
        assert!((1..=4).contains(&dice), "total speed {speed} gave {dice}");
        assert!(dice >= previous, "parry dice dropped at total speed {speed}");
        previous = dice;
    }
}

#[test]
fn defense_base_only_takes_half_die_faces() {
    for level in -20..=40 {
        let base = defense_base(dice_size(level));
        assert!([3, 4, 5, 6].contains(&base), "level {level} gave {base}");
    }
}

#[test]
fn strength_ten_rolls_three_attack_dice() {
    assert_eq!(attack_dice(10), 3);
}

#[test]
fn heavy_armor_slows_parry() {
    assert_eq!(speed_bonus(Armor::Heavy), -3);
    let total = total_speed(14, Armor::Heavy);
    assert_eq!(total, 11);
    assert_eq!(parry_dice(total), 1);
}

#[test]
fn level_six_unarmored_defense() {
    let dice = dice_size(6);
    assert_eq!(dice, DiceSize::D10);
    assert_eq!(dice.to_string(), "d10");
    assert_eq!(defense_base(dice), 5);
    assert_eq!(defense_bonus(Armor::Unarmored), 1);
    assert_eq!(defense_total(dice, Armor::Unarmored), 6);
}

#[test]
fn medium_armor_damage_table() {
    assert_eq!(
        armor_damage_bonuses(Armor::Medium),
        DamageBonuses {
            slashing: 0.5,
            piercing: 1.5,
            blunt: 1.0,
            bludgeoning: 1.0,
        }
    );
    assert_eq!(
        armor_damage_bonuses(Armor::Unarmored),
        DamageBonuses {
            slashing: 1.5,
            piercing: 1.5,
            blunt: 1.5,
            bludgeoning: 1.5,
        }
    );
}

#[test]
fn derived_bundle_tracks_record() {
    let mut record = CharacterRecord::default();
    record.level = 6;
    record.stats.strength = 10;
    record.stats.speed = 14;
    record.armor = Armor::Heavy;

    let derived = Derived::from_record(&record);
    assert_eq!(derived.dice_size, DiceSize::D10);
    assert_eq!(derived.attack_dice, 3);
    assert_eq!(derived.speed_bonus, -3);
    assert_eq!(derived.total_speed, 11);
    assert_eq!(derived.parry_dice, 1);
    assert_eq!(derived.defense_base, 5);
    assert_eq!(derived.defense_bonus, -1);
    assert_eq!(derived.defense_total, 4);
    assert_eq!(derived.damage_bonuses, armor_damage_bonuses(Armor::Heavy));
}
