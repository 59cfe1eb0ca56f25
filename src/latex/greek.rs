/// Unicode Greek letters and the TeX math command that replaces each of them
pub const GREEK_LETTERS: [(char, &str); 32] = [
    ('α', "alpha"),
    ('β', "beta"),
    ('γ', "gamma"),
    ('Γ', "Gamma"),
    ('δ', "delta"),
    ('Δ', "Delta"),
    ('ϵ', "epsilon"),
    ('ζ', "zeta"),
    ('η', "eta"),
    ('θ', "theta"),
    ('Θ', "Theta"),
    ('ι', "iota"),
    ('κ', "kappa"),
    ('λ', "lambda"),
    ('Λ', "Lambda"),
    ('μ', "mu"),
    ('ν', "nu"),
    ('π', "pi"),
    ('Π', "Pi"),
    ('ρ', "rho"),
    ('σ', "sigma"),
    ('Σ', "Sigma"),
    ('τ', "tau"),
    ('υ', "upsilon"),
    ('Υ', "Upsilon"),
    ('ϕ', "phi"),
    ('Φ', "Phi"),
    ('χ', "chi"),
    ('ψ', "psi"),
    ('Ψ', "Psi"),
    ('ω', "omega"),
    ('Ω', "Omega"),
];

/// TeX name of a Greek letter, if it is one we replace
pub fn tex_name(letter: char) -> Option<&'static str> {
    GREEK_LETTERS
        .iter()
        .find(|(greek, _)| *greek == letter)
        .map(|(_, name)| *name)
}

/// Replace unicode Greek literals with escaped TeX math commands, e.g. `α` -> `{$\alpha$}`
pub fn replace_greek(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        match tex_name(c) {
            Some(name) => {
                output.push_str("{$\\");
                output.push_str(name);
                output.push_str("$}");
            }
            None => output.push(c),
        }
    }
    output
}
