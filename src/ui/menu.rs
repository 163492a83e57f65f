//! Text-menu session
//!
//! Prompts for drink inputs, re-asking until each answer is valid, and prints
//! summaries. Works over any reader/writer pair so sessions can be scripted.
//! Running out of input ends the session the same way choosing Quit does.

use std::io::{self, BufRead, Write};

use super::summary::{
    format_coffee_summary, format_latte_summary, format_preset, format_preset_list,
};
use crate::actions::MenuAction;
use crate::core::{
    apply_coffee_addons, apply_latte_addons, calc_coffee, calc_latte_from_shots,
    milk_style_to_ratio, AppSettings, BrewStrength, CoffeeAddons, EspressoStrength, LatteAddons,
    Roast, ShotSize, CUSTOM_RATIO_SENTINEL, INVALID_STYLE_SENTINEL,
};
use crate::presets::{DrinkKind, DrinkResult, Preset, PresetError, PresetStore};

/// Inputs collected for a latte
struct LatteInputs {
    strength: String,
    shot_size: String,
    shots: i32,
}

/// One interactive calculator session, owning its presets
pub struct Session<R, W> {
    input: R,
    output: W,
    settings: AppSettings,
    presets: PresetStore,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: AppSettings) -> Self {
        Self {
            input,
            output,
            settings,
            presets: PresetStore::new(),
        }
    }

    pub fn presets(&self) -> &PresetStore {
        &self.presets
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run menu rounds until the user quits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        match self.run_rounds() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                log::debug!("Input closed, ending session");
                writeln!(self.output)?;
            }
            other => other?,
        }
        writeln!(
            self.output,
            "Thank you for using the Coffee & Latte Ratio Calculator!"
        )?;
        Ok(())
    }

    fn run_rounds(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n=== Coffee & Latte Ratio Calculator ===")?;
            writeln!(self.output, "            === Menu ===")?;
            for (i, action) in MenuAction::ALL.iter().enumerate() {
                writeln!(self.output, "          {}) {}", i + 1, action.label())?;
            }

            let choice = self.prompt("\nEnter option: ")?;
            match MenuAction::from_choice(&choice) {
                Some(MenuAction::MakeDrink) => self.make_drink()?,
                Some(MenuAction::CreatePreset) => self.create_preset()?,
                Some(MenuAction::LoadPreset) => self.load_preset()?,
                Some(MenuAction::ListPresets) => {
                    let list = format_preset_list(&self.presets);
                    write!(self.output, "{}", list)?;
                }
                Some(MenuAction::Quit) => return Ok(()),
                None => writeln!(self.output, "\nPlease enter a valid option!")?,
            }

            if !self.prompt_yes_no("\nWould you like to perform another calculation? (y/n): ")? {
                return Ok(());
            }
        }
    }

    // === Flows ===

    fn make_drink(&mut self) -> io::Result<()> {
        match self.prompt_drink_kind("Choose drink (coffee or latte): ")? {
            DrinkKind::Coffee => self.make_coffee(),
            DrinkKind::Latte => self.make_latte(),
        }
    }

    fn make_coffee(&mut self) -> io::Result<()> {
        let (roast, strength, cups) = self.prompt_coffee_inputs()?;

        let result = match calc_coffee(&strength, &roast, cups) {
            Ok(r) => r,
            Err(e) => {
                writeln!(self.output, "Calculation error: {}", e)?;
                return Ok(());
            }
        };

        let addons = if self.prompt_yes_no("Would you like add-ons? (y/n): ")? {
            self.prompt_coffee_addons()?
        } else {
            CoffeeAddons::default()
        };
        let result = apply_coffee_addons(&result, &addons);

        let summary = format_coffee_summary(&result, &roast, &strength, &addons, &self.settings);
        write!(self.output, "{}", summary)
    }

    fn make_latte(&mut self) -> io::Result<()> {
        let inputs = self.prompt_latte_inputs()?;

        let result = match calc_latte_from_shots(&inputs.strength, &inputs.shot_size, inputs.shots) {
            Ok(r) => r,
            Err(e) => {
                writeln!(self.output, "Calculation error: {}", e)?;
                return Ok(());
            }
        };

        let addons = if self.prompt_yes_no("Would you like add-ons? (y/n): ")? {
            self.prompt_latte_addons()?
        } else {
            LatteAddons::default()
        };
        let result = apply_latte_addons(&result, &addons);

        let (milk_style, ratio) = self.prompt_milk_target()?;
        let result = match result.with_milk_target(&milk_style, ratio) {
            Ok(r) => r,
            Err(e) => {
                writeln!(self.output, "Calculation error: {}", e)?;
                return Ok(());
            }
        };

        let summary = format_latte_summary(&result, &inputs.strength, &addons, &self.settings);
        write!(self.output, "{}", summary)
    }

    fn create_preset(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Create Preset ===")?;

        let name = loop {
            let name = self.prompt("Enter a name for this preset: ")?;
            if !name.is_empty() {
                break name;
            }
            writeln!(self.output, "Preset name cannot be empty.")?;
        };
        let mut preset = Preset::new(name);

        let populated = match self.prompt_drink_kind("Is this a coffee or latte preset? ")? {
            DrinkKind::Coffee => {
                let (roast, strength, cups) = self.prompt_coffee_inputs()?;
                preset.set_coffee(&roast, &strength, cups)
            }
            DrinkKind::Latte => {
                let inputs = self.prompt_latte_inputs()?;
                let (milk_style, ratio) = self.prompt_milk_target()?;
                preset.set_latte(
                    &inputs.shot_size,
                    inputs.shots,
                    &inputs.strength,
                    &milk_style,
                    ratio,
                )
            }
        };

        if let Err(e) = populated {
            writeln!(self.output, "Could not create preset: {}", e)?;
            return Ok(());
        }

        self.presets.add(preset);
        writeln!(self.output, "\nPreset saved!")
    }

    fn load_preset(&mut self) -> io::Result<()> {
        if self.presets.is_empty() {
            return writeln!(self.output, "\nNo presets saved yet.");
        }

        let list = format_preset_list(&self.presets);
        write!(self.output, "{}", list)?;

        // Exact, case-sensitive name; first match wins
        let name = self.prompt("\nEnter preset name: ")?;
        let Some(preset) = self.presets.find_by_name(&name) else {
            let names = self.presets.list_names().join(", ");
            return writeln!(self.output, "Preset not found. Saved presets: {}", names);
        };

        let mut text = format_preset(preset, &self.settings);
        text.push_str("\n=== Calculated Drink Summary ===\n");

        match self.replay_summary(preset) {
            Ok(summary) => text.push_str(&summary),
            Err(e) => {
                log::warn!("Preset '{}' failed to replay: {}", preset.name(), e);
                text.push_str(&format!("{}\n", e));
            }
        }

        write!(self.output, "{}", text)
    }

    /// Recalculate a preset and summarize it without add-ons
    fn replay_summary(&self, preset: &Preset) -> Result<String, PresetError> {
        let summary = match preset.replay()? {
            DrinkResult::Coffee(result) => {
                let params = preset.coffee()?;
                format_coffee_summary(
                    &result,
                    &params.roast,
                    &params.strength,
                    &CoffeeAddons::default(),
                    &self.settings,
                )
            }
            DrinkResult::Latte(result) => {
                let params = preset.latte()?;
                format_latte_summary(
                    &result,
                    &params.strength,
                    &LatteAddons::default(),
                    &self.settings,
                )
            }
        };
        Ok(summary)
    }

    // === Input groups ===

    fn prompt_coffee_inputs(&mut self) -> io::Result<(String, String, f64)> {
        let roast = self.prompt_choice(
            &format!("Enter bean roast type ({}): ", Roast::LABELS.join(", ")),
            |s| Roast::parse(s).is_some(),
            "Invalid roast. Please enter light, medium, or dark.",
        )?;
        let strength = self.prompt_choice(
            &format!("Enter coffee strength ({}): ", BrewStrength::LABELS.join(", ")),
            |s| BrewStrength::parse(s).is_some(),
            "Invalid strength. Please enter bolder, medium, or weaker.",
        )?;
        let cups = self.prompt_number(
            "Enter desired coffee amount (in cups): ",
            |n: f64| n.is_finite() && n > 0.0,
            "Invalid amount. Please enter a positive number.",
        )?;
        Ok((roast, strength, cups))
    }

    fn prompt_latte_inputs(&mut self) -> io::Result<LatteInputs> {
        let strength = self.prompt_choice(
            &format!("Enter latte strength ({}): ", EspressoStrength::LABELS.join(" or ")),
            |s| EspressoStrength::parse(s).is_some(),
            "Invalid input. Please enter 'stronger' or 'weaker'.",
        )?;
        let shot_size = self.prompt_choice(
            "Shot size (single = 8g, double = 16g): ",
            |s| ShotSize::parse(s).is_some(),
            "Invalid shot size. Enter single or double.",
        )?;
        let shots = self.prompt_number(
            "How many shots? ",
            |n: i32| n > 0,
            "Invalid input. Enter a positive whole number.",
        )?;
        Ok(LatteInputs {
            strength,
            shot_size,
            shots,
        })
    }

    /// Milk style label and its resolved ratio
    fn prompt_milk_target(&mut self) -> io::Result<(String, f64)> {
        let (style, ratio) = loop {
            let style = self.prompt("Milk target style (none/cortado/flatwhite/latte/custom): ")?;
            let ratio = milk_style_to_ratio(&style);
            if ratio == INVALID_STYLE_SENTINEL {
                writeln!(self.output, "Invalid milk style. Try again.")?;
            } else {
                break (style, ratio);
            }
        };

        if ratio == CUSTOM_RATIO_SENTINEL {
            let custom = self.prompt_number(
                "Enter milk:espresso ratio (e.g., 2.5 means milk is 2.5x espresso): ",
                |n: f64| n.is_finite() && n >= 0.0,
                "Invalid ratio. Enter a non-negative number.",
            )?;
            return Ok((style, custom));
        }
        Ok((style, ratio))
    }

    fn prompt_coffee_addons(&mut self) -> io::Result<CoffeeAddons> {
        writeln!(self.output, "\n--- Coffee Add-ons Menu ---")?;
        writeln!(self.output, "1) Add Ice (cold drink)")?;
        writeln!(self.output, "2) Toppings")?;

        let mut addons = CoffeeAddons::default();
        match self.prompt("Enter your choice: ")?.as_str() {
            "1" => {
                writeln!(self.output, "Turning coffee into a cold version.")?;
                addons.iced = true;
            }
            "2" => {
                let topping = self.prompt_topping("coffee")?;
                addons.topping = Some(topping);
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(addons)
    }

    fn prompt_latte_addons(&mut self) -> io::Result<LatteAddons> {
        writeln!(self.output, "\n--- Latte Add-ons Menu ---")?;
        writeln!(self.output, "1) Extra Espresso Shots")?;
        writeln!(self.output, "2) Add Ice (cold latte)")?;
        writeln!(self.output, "3) Toppings")?;

        let mut addons = LatteAddons::default();
        match self.prompt("Enter your choice: ")?.as_str() {
            "1" => {
                addons.extra_shots = self.prompt_number(
                    "How many extra shots? ",
                    |_: u32| true,
                    "Invalid input. Enter a whole number of shots.",
                )?;
            }
            "2" => {
                writeln!(self.output, "Turning latte into a cold version.")?;
                addons.iced = true;
            }
            "3" => {
                let topping = self.prompt_topping("latte")?;
                addons.topping = Some(topping);
            }
            _ => writeln!(self.output, "Invalid choice.")?,
        }
        Ok(addons)
    }

    fn prompt_topping(&mut self, drink: &str) -> io::Result<String> {
        let topping = self.prompt("Enter topping type (whipped cream, cinnamon, chocolate): ")?;
        writeln!(self.output, "Added {} to your {}!", topping, drink)?;
        Ok(topping)
    }

    // === Primitive prompts ===

    /// Print a prompt and read one trimmed line
    fn prompt(&mut self, message: &str) -> io::Result<String> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    fn prompt_choice(
        &mut self,
        message: &str,
        is_valid: impl Fn(&str) -> bool,
        invalid_message: &str,
    ) -> io::Result<String> {
        loop {
            let answer = self.prompt(message)?;
            if is_valid(&answer) {
                return Ok(answer);
            }
            writeln!(self.output, "{}", invalid_message)?;
        }
    }

    fn prompt_number<T: std::str::FromStr + Copy>(
        &mut self,
        message: &str,
        is_valid: impl Fn(T) -> bool,
        invalid_message: &str,
    ) -> io::Result<T> {
        loop {
            let answer = self.prompt(message)?;
            match answer.parse::<T>() {
                Ok(n) if is_valid(n) => return Ok(n),
                _ => writeln!(self.output, "{}", invalid_message)?,
            }
        }
    }

    fn prompt_drink_kind(&mut self, message: &str) -> io::Result<DrinkKind> {
        loop {
            let answer = self.prompt(message)?;
            if let Some(kind) = DrinkKind::parse(&answer) {
                return Ok(kind);
            }
            writeln!(self.output, "Invalid input. Please enter 'coffee' or 'latte'.")?;
        }
    }

    fn prompt_yes_no(&mut self, message: &str) -> io::Result<bool> {
        loop {
            let answer = self.prompt(message)?.to_lowercase();
            match answer.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Enter 'y' or 'n'.")?,
            }
        }
    }
}
