use shared::Difficulty;
use yew::prelude::*;

/// Badge colors keyed by difficulty. Total over all inputs: anything
/// outside the three known tiers falls back to gray.
pub fn difficulty_classes(difficulty: &Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "bg-green-100 text-green-800",
        Difficulty::Intermediate => "bg-yellow-100 text-yellow-800",
        Difficulty::Expert => "bg-red-100 text-red-800",
        Difficulty::Other(_) => "bg-gray-100 text-gray-800",
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct DifficultyBadgeProps {
    pub difficulty: Difficulty,
}

#[function_component(DifficultyBadge)]
pub fn difficulty_badge(props: &DifficultyBadgeProps) -> Html {
    html! {
        <span class={classes!(
            "inline-flex", "items-center", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-medium",
            difficulty_classes(&props.difficulty)
        )}>
            {props.difficulty.to_string()}
        </span>
    }
}
