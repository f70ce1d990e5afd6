/// Anything that makes a sound. Every implementation returns a non-empty
/// sound and has no side effects, so any one can stand in for another.
pub trait Speaker {
    fn speak(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dog;

impl Speaker for Dog {
    fn speak(&self) -> &'static str { "Woof!" }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Cat;

impl Speaker for Cat {
    fn speak(&self) -> &'static str { "Meow!" }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parrot;

impl Speaker for Parrot {
    fn speak(&self) -> &'static str { "Squawk!" }
}

pub fn describe_animal(speaker: &dyn Speaker) -> String {
    format!("The animal says: {}", speaker.speak())
}
