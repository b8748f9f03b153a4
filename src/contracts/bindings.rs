//! Typed bindings for the marketplace contracts
//!
//! The Solidity sources live outside this repository; these interfaces
//! describe only the surface the flows call. Creation bytecode for the two
//! contracts deployed directly (SystemManager, TrustedSeller) is read from
//! Hardhat artifacts at runtime, so no bytecode is embedded here.

use alloy::sol;

// Registry contract. Deploys Users and Reviews from its constructor and
// DigitalCopy on request, announcing each address with an event.
sol! {
    #[sol(rpc)]
    contract SystemManager {
        event DeployedUsersContract(address usersContract);
        event DeployedReviewsContract(address reviewsContract);
        event DeployedDigitalCopyContract(address digitalCopyContract);

        constructor();

        function deployDigitalCopy() external;
        function add(address seller) external;
        function retrieveAllOwnedItems(address owner) external view returns (uint256[] memory itemIds);
        function retrieveListingInformation(address digitalCopy, uint256 itemId)
            external
            view
            returns (
                address seller,
                string memory price,
                bool forSale,
                uint256 averageRating,
                uint256 reviewCount
            );
    }
}

// Retail storefront. `purchase` mints a digital copy for the buyer.
sol! {
    #[sol(rpc)]
    contract TrustedSeller {
        constructor(string name, address systemManager);

        function purchase(
            string model,
            string price,
            string category,
            string brand,
            string serialNumber,
            address buyer
        ) external;
        function changeDigitalCopyContract(address digitalCopy) external;
    }
}

// The NFT contract backing each physical item.
sol! {
    #[sol(rpc)]
    interface DigitalCopy {
        function getOwner(uint256 itemId) external view returns (address owner);
        function isItemForSale(uint256 itemId) external view returns (bool forSale);
        function retrieveInformationForDigitalCopy(uint256 itemId)
            external
            view
            returns (
                string memory model,
                string memory price,
                string memory category,
                string memory brand,
                string memory serialNumber
            );
        function putItemForSale(uint256 itemId) external;
        function transfer(uint256 itemId, address to, string price) external;
        function burn(uint256 itemId) external;
    }
}

// User registry.
sol! {
    #[sol(rpc)]
    interface Users {
        function createUser(string name, string idNumber) external;
    }
}

// Seller reviews, keyed by the reviewed item.
sol! {
    #[sol(rpc)]
    interface Reviews {
        function newReview(
            address seller,
            uint8 rating,
            address digitalCopy,
            uint256 itemId,
            bytes32 contentHash,
            string comment
        ) external;
    }
}
