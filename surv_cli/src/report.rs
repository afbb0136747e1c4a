//! Plain-text rendering of calculation breakdowns

use surv_core::data::BossEncounter;
use surv_core::hitpoints::HitpointBreakdown;
use surv_core::loadout::Loadout;
use surv_core::mitigation::MitigationBreakdown;

pub fn separator(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("  {}", title);
    println!("{}\n", "=".repeat(60));
}

pub fn print_loadout(loadout: &Loadout) {
    separator("Loadout");
    println!("  Constitution level: {}", loadout.constitution_level);
    println!("  Armor pieces:       {}", loadout.armor_pieces.len());
    for piece in &loadout.armor_pieces {
        println!("    - {} (t{}, {})", piece.name, piece.tier, piece.equip_slot);
    }
    println!(
        "  Prayer:             {}",
        loadout.prayer.map(|p| p.name.as_str()).unwrap_or("none")
    );
    println!(
        "  Aura:               {}",
        loadout.aura.map(|a| a.name.as_str()).unwrap_or("none")
    );
    println!(
        "  Familiar:           {}",
        loadout.familiar.map(|f| f.name.as_str()).unwrap_or("none")
    );
}

pub fn print_hitpoints(breakdown: &HitpointBreakdown) {
    separator("Maximum hitpoints");
    println!("  Base:     {:>9.0}", breakdown.base_hp);
    println!("  Armor:    {:>9.0}", breakdown.armor_bonus);
    println!("  Prayer:   {:>9.0}", breakdown.prayer_bonus);
    println!("  Aura:     {:>9.0}", breakdown.aura_bonus);
    println!("  Bonfire:  {:>9.0}", breakdown.bonfire_bonus);
    println!("  Total:    {:>9.0}", breakdown.total_max);
}

pub fn print_boss_mitigation(
    boss: &BossEncounter,
    enrage: u32,
    breakdowns: &[MitigationBreakdown],
) {
    separator(&format!("{} @ {}% enrage", boss.name, enrage));
    for (mechanic, breakdown) in boss.mechanics.iter().zip(breakdowns) {
        println!(
            "  {} ({}, {} hit{})",
            mechanic.name,
            mechanic.attack_type,
            mechanic.hits,
            if mechanic.hits == 1 { "" } else { "s" }
        );
        for stage in &breakdown.stages {
            println!("    {:<9} {:>9.1}", stage.stage.label(), stage.damage);
        }
        if mechanic.can_be_avoided {
            println!("    (avoidable)");
        }
        if let Some(tips) = &mechanic.tips {
            println!("    Tip: {tips}");
        }
        println!();
    }
}
